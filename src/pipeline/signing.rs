//! VsixSignTool invocation.

use super::discovery::SigningToolLocation;
use super::error::{Error, Result};
use super::host::{CommandInvocation, Host, quoted};
use super::inputs::ResolvedPaths;
use super::request::SigningRequest;

/// Build `vsixsigntool sign /f "<cert>" /p <password> "<artifact>"`.
///
/// The password goes in as a secret argument so it never shows up when the
/// command is displayed.
pub fn build_invocation(
    tool: &SigningToolLocation,
    paths: &ResolvedPaths,
    request: &SigningRequest,
) -> CommandInvocation {
    CommandInvocation::new(tool.path())
        .arg("sign")
        .arg("/f")
        .arg(quoted(&paths.certificate_path))
        .arg("/p")
        .secret_arg(request.password.expose())
        .arg(quoted(&paths.artifact_path))
}

/// Sign the artifact. Output is not parsed; only the exit status matters.
pub async fn sign<H: Host>(
    host: &H,
    tool: &SigningToolLocation,
    paths: &ResolvedPaths,
    request: &SigningRequest,
) -> Result<()> {
    let invocation = build_invocation(tool, paths, request);
    log::info!("Signing {}", paths.artifact_path.display());
    log::debug!("Running {}", invocation);

    let output = host
        .run(&invocation)
        .await
        .map_err(|error| Error::CommandFailed {
            command: invocation.to_string(),
            error,
        })?;

    let password = request.password.expose();
    let stdout = mask(output.stdout.trim(), password);
    let stderr = mask(output.stderr.trim(), password);
    if !stdout.is_empty() {
        log::debug!("VsixSignTool stdout:\n{}", stdout);
    }
    if !stderr.is_empty() {
        log::debug!("VsixSignTool stderr:\n{}", stderr);
    }

    if !output.success() {
        return Err(Error::SigningProcessFailure {
            artifact: paths.artifact_path.clone(),
            code: output.code,
            output: if stderr.is_empty() { stdout } else { stderr },
        });
    }

    log::info!("✓ Signed {}", paths.artifact_path.display());
    Ok(())
}

/// Replace every occurrence of `secret` in tool output with `***`.
fn mask(text: &str, secret: &str) -> String {
    if secret.is_empty() {
        return text.to_string();
    }
    text.replace(secret, "***")
}
