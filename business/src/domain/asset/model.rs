use serde::Serialize;

use super::errors::AssetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Style,
    Script,
}

/// A static dependency the widget needs before its own script runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Asset {
    pub handle: String,
    pub kind: AssetKind,
    pub src: String,
}

/// Ordered set of widget dependencies.
///
/// Styles always come before scripts; scripts keep their registration order,
/// which is the order the host page must load them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssetManifest {
    assets: Vec<Asset>,
}

impl AssetManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_style(
        &mut self,
        handle: impl Into<String>,
        src: impl Into<String>,
    ) -> Result<&mut Self, AssetError> {
        self.register(handle.into(), AssetKind::Style, src.into())
    }

    pub fn register_script(
        &mut self,
        handle: impl Into<String>,
        src: impl Into<String>,
    ) -> Result<&mut Self, AssetError> {
        self.register(handle.into(), AssetKind::Script, src.into())
    }

    fn register(
        &mut self,
        handle: String,
        kind: AssetKind,
        src: String,
    ) -> Result<&mut Self, AssetError> {
        if handle.trim().is_empty() {
            return Err(AssetError::HandleEmpty);
        }
        if src.trim().is_empty() {
            return Err(AssetError::SourceEmpty);
        }
        if self.assets.iter().any(|a| a.handle == handle) {
            return Err(AssetError::DuplicateHandle(handle));
        }

        let asset = Asset { handle, kind, src };
        match kind {
            AssetKind::Style => {
                let first_script = self
                    .assets
                    .iter()
                    .position(|a| a.kind == AssetKind::Script)
                    .unwrap_or(self.assets.len());
                self.assets.insert(first_script, asset);
            }
            AssetKind::Script => self.assets.push(asset),
        }
        Ok(self)
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn styles(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter().filter(|a| a.kind == AssetKind::Style)
    }

    pub fn scripts(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter().filter(|a| a.kind == AssetKind::Script)
    }
}
