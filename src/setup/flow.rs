//! The sequential setup procedure.
//!
//! Six states run in order: platform check, runtime version check, tool
//! check, dependency installation, permission grant, placement. Each is a
//! terminal failure point; the first error halts the run. There are no
//! retries, and the dependency-install side effect is not rolled back on a
//! later failure.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ArchaiError, Result};
use crate::shell::{dir_on_path, is_elevated};
use crate::ui::{Prompt, PromptOption, PromptType, UserInterface};

use super::placement::{system_bin_dir, user_bin_dir, PlacementChoice, BIN_NAME};
use super::tools::SystemTools;
use super::version::version_at_least;

/// Tool whose version gates the assistant's guidance.
pub const RUNTIME_TOOL: &str = "pacman";

/// Minimum supported runtime version.
pub const MIN_RUNTIME_VERSION: &str = "5.0";

/// Tools that must be present before installation proceeds, with the
/// remediation shown when one is missing.
const REQUIRED_TOOLS: &[(&str, &str)] = &[
    (
        "pacman",
        "pacman ships with the Arch base system; archai only supports Arch-family distributions",
    ),
    ("sudo", "Install it with: pacman -S sudo"),
];

/// System packages the assistant relies on at runtime (TLS trust roots for
/// its HTTPS calls).
const SYSTEM_PACKAGES: &[&str] = &["ca-certificates"];

/// Number of sequential setup steps, for progress display.
const STEP_COUNT: usize = 6;

/// Result of a completed setup run.
#[derive(Debug)]
pub enum SetupOutcome {
    /// The executable was copied to `dest`.
    Installed { dest: PathBuf },
    /// The user declined installation (explicitly or via invalid input).
    Skipped,
}

/// The setup procedure.
pub struct SetupFlow<'a> {
    tools: &'a dyn SystemTools,
    artifact: PathBuf,
    system_dir: PathBuf,
    user_dir: PathBuf,
    elevated: bool,
}

impl<'a> SetupFlow<'a> {
    /// Create a flow installing the currently running executable.
    pub fn new(tools: &'a dyn SystemTools) -> Result<Self> {
        Ok(Self {
            tools,
            artifact: std::env::current_exe()?,
            system_dir: system_bin_dir(),
            user_dir: user_bin_dir(),
            elevated: is_elevated(),
        })
    }

    /// Override the artifact to install (for testing).
    pub fn with_artifact(mut self, path: PathBuf) -> Self {
        self.artifact = path;
        self
    }

    /// Override the system-wide destination directory (for testing).
    pub fn with_system_dir(mut self, dir: PathBuf) -> Self {
        self.system_dir = dir;
        self
    }

    /// Override the per-user destination directory (for testing).
    pub fn with_user_dir(mut self, dir: PathBuf) -> Self {
        self.user_dir = dir;
        self
    }

    /// Override the detected privilege level (for testing).
    pub fn with_elevated(mut self, elevated: bool) -> Self {
        self.elevated = elevated;
        self
    }

    /// Run the full setup sequence.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<SetupOutcome> {
        ui.show_header("archai setup");

        ui.show_progress(1, STEP_COUNT);
        self.check_platform()?;
        ui.success(&format!("Platform: {}", std::env::consts::OS));

        ui.show_progress(2, STEP_COUNT);
        let found = self.check_runtime()?;
        ui.success(&format!(
            "{} {} (minimum {})",
            RUNTIME_TOOL, found, MIN_RUNTIME_VERSION
        ));

        ui.show_progress(3, STEP_COUNT);
        self.check_tools()?;
        ui.success("Required tools present");

        ui.show_progress(4, STEP_COUNT);
        let mut spinner = ui.start_spinner("Installing system packages...");
        match self.tools.install_packages(SYSTEM_PACKAGES) {
            Ok(()) => spinner.finish_success("System packages installed"),
            Err(e) => {
                spinner.finish_error("Dependency installation failed");
                return Err(e);
            }
        }

        ui.show_progress(5, STEP_COUNT);
        self.grant_execute()?;
        ui.success("Executable permissions set");

        ui.show_progress(6, STEP_COUNT);
        let choice = self.select_placement(ui)?;
        let outcome = self.perform_placement(choice, ui)?;

        emit_guidance(ui);
        Ok(outcome)
    }

    fn check_platform(&self) -> Result<()> {
        let os = std::env::consts::OS;
        if platform_supported(os) {
            Ok(())
        } else {
            Err(ArchaiError::UnsupportedPlatform { os: os.to_string() })
        }
    }

    fn check_runtime(&self) -> Result<String> {
        let found = self.tools.tool_version(RUNTIME_TOOL).ok_or_else(|| {
            ArchaiError::UnsupportedRuntime {
                runtime: RUNTIME_TOOL.to_string(),
                found: "unknown".to_string(),
                minimum: MIN_RUNTIME_VERSION.to_string(),
            }
        })?;

        if version_at_least(&found, MIN_RUNTIME_VERSION) {
            Ok(found)
        } else {
            Err(ArchaiError::UnsupportedRuntime {
                runtime: RUNTIME_TOOL.to_string(),
                found,
                minimum: MIN_RUNTIME_VERSION.to_string(),
            })
        }
    }

    fn check_tools(&self) -> Result<()> {
        for (tool, hint) in REQUIRED_TOOLS {
            if !self.tools.tool_present(tool) {
                return Err(ArchaiError::MissingDependency {
                    tool: tool.to_string(),
                    hint: hint.to_string(),
                });
            }
        }
        Ok(())
    }

    fn grant_execute(&self) -> Result<()> {
        let metadata =
            fs::metadata(&self.artifact).map_err(|e| ArchaiError::Permission {
                path: self.artifact.clone(),
                message: e.to_string(),
            })?;

        set_executable(&self.artifact, metadata.permissions()).map_err(|e| {
            ArchaiError::Permission {
                path: self.artifact.clone(),
                message: e.to_string(),
            }
        })
    }

    fn select_placement(&self, ui: &mut dyn UserInterface) -> Result<PlacementChoice> {
        let options = vec![
            PromptOption {
                label: format!("System-wide ({})", self.system_dir.display()),
                value: "1".to_string(),
            },
            PromptOption {
                label: format!("Current user ({})", self.user_dir.display()),
                value: "2".to_string(),
            },
            PromptOption {
                label: "Skip installation".to_string(),
                value: "3".to_string(),
            },
        ];

        let prompt = Prompt {
            key: "placement".to_string(),
            question: "Where should the archai executable be installed?".to_string(),
            prompt_type: PromptType::Select { options },
            default: Some("2".to_string()),
        };

        let raw = ui.prompt(&prompt)?.as_string();
        match PlacementChoice::from_input(&raw) {
            Some(choice) => Ok(choice),
            None => {
                ui.warning(&format!(
                    "Unrecognized choice '{}', skipping installation",
                    raw.trim()
                ));
                Ok(PlacementChoice::Skip)
            }
        }
    }

    fn perform_placement(
        &self,
        choice: PlacementChoice,
        ui: &mut dyn UserInterface,
    ) -> Result<SetupOutcome> {
        match choice {
            PlacementChoice::System => {
                let dest = self.system_dir.join(BIN_NAME);
                if !self.elevated {
                    return Err(ArchaiError::Privilege { dest });
                }
                let dest = self.copy_to(&self.system_dir).map_err(|e| match e {
                    ArchaiError::Io(ref io)
                        if io.kind() == std::io::ErrorKind::PermissionDenied =>
                    {
                        ArchaiError::Privilege {
                            dest: self.system_dir.join(BIN_NAME),
                        }
                    }
                    other => other,
                })?;
                ui.success(&format!("Installed to {}", dest.display()));
                Ok(SetupOutcome::Installed { dest })
            }
            PlacementChoice::User => {
                fs::create_dir_all(&self.user_dir)?;
                let dest = self.copy_to(&self.user_dir)?;
                ui.success(&format!("Installed to {}", dest.display()));
                if !dir_on_path(&self.user_dir) {
                    ui.warning(&format!(
                        "{} is not on your PATH; add it to your shell profile",
                        self.user_dir.display()
                    ));
                }
                Ok(SetupOutcome::Installed { dest })
            }
            PlacementChoice::Skip => {
                ui.message("Skipping installation; run the executable from its current location.");
                Ok(SetupOutcome::Skipped)
            }
        }
    }

    fn copy_to(&self, dir: &Path) -> Result<PathBuf> {
        let dest = dir.join(BIN_NAME);
        fs::copy(&self.artifact, &dest)?;
        set_executable(&dest, fs::metadata(&dest)?.permissions())?;
        tracing::debug!("copied {} to {}", self.artifact.display(), dest.display());
        Ok(dest)
    }
}

/// Check whether the host OS identifier is supported.
fn platform_supported(os: &str) -> bool {
    os == "linux"
}

#[cfg(unix)]
fn set_executable(path: &Path, mut perms: fs::Permissions) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    perms.set_mode(perms.mode() | 0o755);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn set_executable(_path: &Path, _perms: fs::Permissions) -> std::io::Result<()> {
    Ok(())
}

fn emit_guidance(ui: &mut dyn UserInterface) {
    ui.message("");
    ui.message("Next steps:");
    ui.message("  1. export GOOGLE_AI_API_KEY='your-key'  (or create ~/.config/archai/api_key)");
    ui.message("  2. archai ask \"How do I update my system?\"");
    ui.message("  3. archai chat");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    struct StubTools {
        version: Option<String>,
    }

    impl SystemTools for StubTools {
        fn tool_present(&self, _name: &str) -> bool {
            true
        }

        fn tool_version(&self, _name: &str) -> Option<String> {
            self.version.clone()
        }

        fn install_packages(&self, _packages: &[&str]) -> Result<()> {
            Ok(())
        }
    }

    fn flow_with_version<'a>(tools: &'a StubTools, temp: &TempDir) -> SetupFlow<'a> {
        let artifact = temp.path().join("archai-src");
        fs::write(&artifact, b"binary").unwrap();
        SetupFlow::new(tools)
            .unwrap()
            .with_artifact(artifact)
            .with_system_dir(temp.path().join("system"))
            .with_user_dir(temp.path().join("user"))
            .with_elevated(false)
    }

    #[test]
    fn platform_supported_only_for_linux() {
        assert!(platform_supported("linux"));
        assert!(!platform_supported("windows"));
        assert!(!platform_supported("macos"));
    }

    #[test]
    fn check_runtime_accepts_version_at_floor() {
        let temp = TempDir::new().unwrap();
        let tools = StubTools {
            version: Some(MIN_RUNTIME_VERSION.to_string()),
        };
        let flow = flow_with_version(&tools, &temp);
        assert_eq!(flow.check_runtime().unwrap(), MIN_RUNTIME_VERSION);
    }

    #[test]
    fn check_runtime_rejects_version_below_floor() {
        let temp = TempDir::new().unwrap();
        let tools = StubTools {
            version: Some("4.2.1".to_string()),
        };
        let flow = flow_with_version(&tools, &temp);
        assert!(matches!(
            flow.check_runtime(),
            Err(ArchaiError::UnsupportedRuntime { .. })
        ));
    }

    #[test]
    fn check_runtime_rejects_unknown_version() {
        let temp = TempDir::new().unwrap();
        let tools = StubTools { version: None };
        let flow = flow_with_version(&tools, &temp);
        let err = flow.check_runtime().unwrap_err();
        assert!(err.to_string().contains("unknown"));
    }

    #[test]
    fn grant_execute_fails_for_missing_artifact() {
        let temp = TempDir::new().unwrap();
        let tools = StubTools {
            version: Some("6.1.0".to_string()),
        };
        let flow = flow_with_version(&tools, &temp).with_artifact(temp.path().join("missing"));
        assert!(matches!(
            flow.grant_execute(),
            Err(ArchaiError::Permission { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn grant_execute_sets_executable_bit() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let tools = StubTools {
            version: Some("6.1.0".to_string()),
        };
        let flow = flow_with_version(&tools, &temp);
        flow.grant_execute().unwrap();

        let mode = fs::metadata(temp.path().join("archai-src"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    #[test]
    fn select_placement_maps_invalid_input_to_skip_with_warning() {
        let temp = TempDir::new().unwrap();
        let tools = StubTools {
            version: Some("6.1.0".to_string()),
        };
        let flow = flow_with_version(&tools, &temp);

        let mut ui = MockUI::new();
        ui.set_prompt_response("placement", "9");

        let choice = flow.select_placement(&mut ui).unwrap();
        assert_eq!(choice, PlacementChoice::Skip);
        assert!(ui.has_warning("9"));
    }

    #[test]
    fn select_placement_defaults_to_user_dir() {
        let temp = TempDir::new().unwrap();
        let tools = StubTools {
            version: Some("6.1.0".to_string()),
        };
        let flow = flow_with_version(&tools, &temp);

        // MockUI answers with the prompt default when unconfigured
        let mut ui = MockUI::new();
        let choice = flow.select_placement(&mut ui).unwrap();
        assert_eq!(choice, PlacementChoice::User);
    }
}
