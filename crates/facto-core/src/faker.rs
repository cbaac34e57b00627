//! Fake data for factory bodies.
//!
//! [`Faker`] is the handle exposed through [`crate::Helper::faker`]. It wraps the
//! `fake` crate generators behind plain methods so factories can write
//! `h.faker().email()` without importing generator types. The engine never
//! inspects what it returns.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use fake::Fake;
use fake::faker::address::raw::{BuildingNumber, CityName, CountryName, StreetName, ZipCode};
use fake::faker::company::raw::CompanyName;
use fake::faker::internet::raw::{SafeEmail, Username};
use fake::faker::lorem::raw::{Paragraph, Sentence, Word};
use fake::faker::name::raw::{FirstName, LastName, Name};
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::{EN, FR_FR, PT_BR, ZH_CN};
use serde::Deserialize;

use crate::error::FactoError;

/// Locale data used by [`Faker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
	/// English
	#[default]
	En,
	/// French (France)
	FrFr,
	/// Portuguese (Brazil)
	PtBr,
	/// Simplified Chinese
	ZhCn,
}

impl FromStr for Locale {
	type Err = FactoError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
			"en" => Ok(Self::En),
			"fr_fr" => Ok(Self::FrFr),
			"pt_br" => Ok(Self::PtBr),
			"zh_cn" => Ok(Self::ZhCn),
			other => Err(FactoError::Settings(format!(
				"unknown locale '{}' (expected en, fr_fr, pt_br or zh_cn)",
				other
			))),
		}
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::En => "en",
			Self::FrFr => "fr_fr",
			Self::PtBr => "pt_br",
			Self::ZhCn => "zh_cn",
		};
		f.write_str(name)
	}
}

// Expands a `raw` faker for the configured locale. Extra arguments are passed
// after the locale, e.g. the word-count range of `Sentence`.
macro_rules! localized {
	($locale:expr, $faker:ident $(, $arg:expr)*) => {
		match $locale {
			Locale::En => $faker(EN $(, $arg)*).fake::<String>(),
			Locale::FrFr => $faker(FR_FR $(, $arg)*).fake::<String>(),
			Locale::PtBr => $faker(PT_BR $(, $arg)*).fake::<String>(),
			Locale::ZhCn => $faker(ZH_CN $(, $arg)*).fake::<String>(),
		}
	};
}

/// Random leaf values for factory bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct Faker {
	locale: Locale,
}

impl Faker {
	/// Creates an English faker.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a faker for `locale`.
	pub fn with_locale(locale: Locale) -> Self {
		Self { locale }
	}

	/// Locale in use.
	pub fn locale(&self) -> Locale {
		self.locale
	}

	/// Given name.
	pub fn first_name(&self) -> String {
		localized!(self.locale, FirstName)
	}

	/// Family name.
	pub fn last_name(&self) -> String {
		localized!(self.locale, LastName)
	}

	/// Full name.
	pub fn name(&self) -> String {
		localized!(self.locale, Name)
	}

	/// An email address on a reserved example domain.
	pub fn email(&self) -> String {
		localized!(self.locale, SafeEmail)
	}

	/// Login-style username.
	pub fn username(&self) -> String {
		localized!(self.locale, Username)
	}

	/// Company name.
	pub fn company(&self) -> String {
		localized!(self.locale, CompanyName)
	}

	/// Single-line street address: building number, street and city.
	pub fn address(&self) -> String {
		format!(
			"{} {}, {}",
			localized!(self.locale, BuildingNumber),
			localized!(self.locale, StreetName),
			localized!(self.locale, CityName)
		)
	}

	/// City name.
	pub fn city(&self) -> String {
		localized!(self.locale, CityName)
	}

	/// Country name.
	pub fn country(&self) -> String {
		localized!(self.locale, CountryName)
	}

	/// Postal code.
	pub fn zip_code(&self) -> String {
		localized!(self.locale, ZipCode)
	}

	/// Phone number in the locale's format.
	pub fn phone_number(&self) -> String {
		localized!(self.locale, PhoneNumber)
	}

	/// A single lorem word.
	pub fn word(&self) -> String {
		localized!(self.locale, Word)
	}

	/// A lorem sentence of four to ten words.
	pub fn sentence(&self) -> String {
		localized!(self.locale, Sentence, 4..10)
	}

	/// A lorem paragraph of three to six sentences.
	pub fn paragraph(&self) -> String {
		localized!(self.locale, Paragraph, 3..6)
	}

	/// A number in `range`. An empty range yields `range.start`.
	pub fn number(&self, range: Range<i64>) -> i64 {
		if range.is_empty() {
			return range.start;
		}
		range.fake::<i64>()
	}

	/// A fair coin flip.
	pub fn boolean(&self) -> bool {
		fake::Faker.fake::<bool>()
	}
}
