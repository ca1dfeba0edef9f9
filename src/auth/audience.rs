//! Device classes reported by the host and the audience labels they map to.

// self
use crate::_prelude::*;

/// Coarse device class supplied by the caller's device classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
	/// Desktop or laptop browser.
	Normal,
	/// Tablet-sized touch device.
	Tablet,
	/// Phone-sized device.
	Mobile,
	/// Anything the classifier could not place.
	Other,
}
impl DeviceClass {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			DeviceClass::Normal => "normal",
			DeviceClass::Tablet => "tablet",
			DeviceClass::Mobile => "mobile",
			DeviceClass::Other => "other",
		}
	}
}
impl Display for DeviceClass {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Informational client-type label embedded in every issued token.
///
/// The audience is recorded for analytics only; it is never enforced as an access-control
/// boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
	/// Issued to a desktop browser.
	Web,
	/// Issued to a tablet.
	Tablet,
	/// Issued to a phone.
	Mobile,
	/// Issued to an unclassified client.
	Unknown,
}
impl Audience {
	/// Returns the label written into the `audience` claim.
	pub const fn as_str(self) -> &'static str {
		match self {
			Audience::Web => "web",
			Audience::Tablet => "tablet",
			Audience::Mobile => "mobile",
			Audience::Unknown => "unknown",
		}
	}

	/// Resolves a claim label, falling back to [`Audience::Unknown`] for anything unrecognized.
	pub fn from_label(label: &str) -> Self {
		match label {
			"web" => Audience::Web,
			"tablet" => Audience::Tablet,
			"mobile" => Audience::Mobile,
			_ => Audience::Unknown,
		}
	}
}
impl From<DeviceClass> for Audience {
	fn from(class: DeviceClass) -> Self {
		match class {
			DeviceClass::Normal => Audience::Web,
			DeviceClass::Tablet => Audience::Tablet,
			DeviceClass::Mobile => Audience::Mobile,
			DeviceClass::Other => Audience::Unknown,
		}
	}
}
impl Display for Audience {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl<'de> Deserialize<'de> for Audience {
	fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let label = String::deserialize(deserializer)?;

		Ok(Self::from_label(&label))
	}
}
