//! Where each artifact family lands relative to the output directory.

use serde::Deserialize;

/// Relative output paths for every artifact family.
///
/// Deserialized from the `[output]` table of `appkod.toml`; missing keys
/// keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputLayout {
    /// Prisma schema file
    pub schema: String,
    /// SQLModel models file
    pub models: String,
    /// FastAPI routes file
    pub routes: String,
    /// Root of the Next.js `app` directory
    pub pages_dir: String,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self {
            schema: "prisma/schema.prisma".to_string(),
            models: "api/models.py".to_string(),
            routes: "api/routes.py".to_string(),
            pages_dir: "web/app".to_string(),
        }
    }
}

impl OutputLayout {
    /// Page file for a route given without leading or trailing `/`.
    ///
    /// The empty route is the root page.
    pub fn page_path(&self, route: &str) -> String {
        let dir = self.pages_dir.trim_end_matches('/');
        if route.is_empty() {
            format!("{}/page.tsx", dir)
        } else {
            format!("{}/{}/page.tsx", dir, route)
        }
    }
}
