//! Engine settings.
//!
//! Settings pick the identifier strategy and faker locale a registry is built
//! with. They can come from a TOML document (either top-level keys or a
//! `[facto]` table) or from environment variables:
//!
//! ```toml
//! [facto]
//! id_strategy = "v7"
//! locale = "fr_fr"
//! ```
//!
//! | Variable             | Values                        |
//! |----------------------|-------------------------------|
//! | `FACTO_ID_STRATEGY`  | `v4`, `v7`, `sequential`      |
//! | `FACTO_LOCALE`       | `en`, `fr_fr`, `pt_br`, `zh_cn` |

use std::env;
use std::path::Path;

use serde::Deserialize;

use crate::error::{FactoError, FactoResult};
use crate::faker::Locale;
use crate::id::IdStrategy;

/// Default prefix for environment variables.
pub const ENV_PREFIX: &str = "FACTO_";

/// Configuration for a [`crate::FactoryRegistry`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FactoSettings {
	/// How session identifiers are minted.
	pub id_strategy: IdStrategy,
	/// Locale for fake data.
	pub locale: Locale,
}

impl FactoSettings {
	/// Parses settings from a TOML document.
	///
	/// # Examples
	///
	/// ```
	/// use facto_core::{FactoSettings, IdStrategy, Locale};
	///
	/// let settings = FactoSettings::from_toml_str("[facto]\nid_strategy = \"v7\"").unwrap();
	/// assert_eq!(settings.id_strategy, IdStrategy::V7);
	/// assert_eq!(settings.locale, Locale::En);
	/// ```
	pub fn from_toml_str(source: &str) -> FactoResult<Self> {
		let mut table: toml::Table = toml::from_str(source)?;
		let section = match table.remove("facto") {
			Some(toml::Value::Table(section)) => section,
			Some(other) => {
				return Err(FactoError::Settings(format!(
					"expected [facto] to be a table, found {}",
					other.type_str()
				)));
			}
			None => table,
		};
		Ok(toml::Value::Table(section).try_into()?)
	}

	/// Reads settings from a TOML file.
	pub fn from_file(path: impl AsRef<Path>) -> FactoResult<Self> {
		let source = std::fs::read_to_string(path.as_ref())?;
		Self::from_toml_str(&source)
	}

	/// Reads `FACTO_ID_STRATEGY` and `FACTO_LOCALE`. Unset variables keep their defaults.
	pub fn from_env() -> FactoResult<Self> {
		Self::from_env_with_prefix(ENV_PREFIX)
	}

	/// Like [`FactoSettings::from_env`] with a custom variable prefix.
	pub fn from_env_with_prefix(prefix: &str) -> FactoResult<Self> {
		let mut settings = Self::default();
		if let Some(value) = read_var(prefix, "ID_STRATEGY") {
			settings.id_strategy = value.parse()?;
		}
		if let Some(value) = read_var(prefix, "LOCALE") {
			settings.locale = value.parse()?;
		}
		tracing::debug!(
			id_strategy = %settings.id_strategy,
			locale = %settings.locale,
			"settings loaded from environment"
		);
		Ok(settings)
	}
}

fn read_var(prefix: &str, key: &str) -> Option<String> {
	env::var(format!("{}{}", prefix, key))
		.ok()
		.filter(|value| !value.trim().is_empty())
}
