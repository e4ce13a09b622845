//! Operator manual: three steps, each with an optional screenshot.

use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideStep {
    pub title: &'static str,
    pub body: &'static str,
    /// Screenshot file name, relative to the assets directory
    pub asset: &'static str,
}

pub static STEPS: [GuideStep; 3] = [
    GuideStep {
        title: "STEP 1: SOURCE",
        body: "Go to the Tubo Woman site. Open a single product page.",
        asset: "Screenshot (593).png",
    },
    GuideStep {
        title: "STEP 2: ACQUIRE",
        body: "Copy the URL from the browser bar.",
        asset: "Screenshot (594).png",
    },
    GuideStep {
        title: "STEP 3: EXECUTE",
        body: "Paste the URL and choose 'Generate assets'.",
        asset: "Screenshot (595).png",
    },
];

/// A step with its screenshot path when the file exists.
#[derive(Debug, Clone)]
pub struct ResolvedStep {
    pub step: &'static GuideStep,
    pub image: Option<PathBuf>,
}

/// Resolve screenshots under `assets_dir`. Missing files are skipped silently.
pub fn resolve_steps(assets_dir: &Path) -> Vec<ResolvedStep> {
    STEPS
        .iter()
        .map(|step| {
            let path = assets_dir.join(step.asset);
            let image = if path.is_file() {
                Some(path)
            } else {
                debug!(asset = %path.display(), "Guide screenshot not found, skipping");
                None
            };
            ResolvedStep { step, image }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_assets_are_skipped() {
        let steps = resolve_steps(Path::new("/nonexistent/studio-assets"));

        assert_eq!(steps.len(), 3);
        assert!(steps.iter().all(|s| s.image.is_none()));
        assert_eq!(steps[0].step.title, "STEP 1: SOURCE");
    }

    #[test]
    fn test_present_asset_is_resolved() {
        let dir = std::env::temp_dir().join(format!("studio-guide-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("Screenshot (594).png"), b"png").unwrap();

        let steps = resolve_steps(&dir);

        assert!(steps[0].image.is_none());
        assert_eq!(steps[1].image.as_deref(), Some(dir.join("Screenshot (594).png").as_path()));
        assert!(steps[2].image.is_none());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
