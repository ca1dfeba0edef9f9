//! Device classification capability supplied by the host application.
//!
//! Request handling and user-agent sniffing stay outside this crate; callers plug in
//! whatever detector they already run by implementing [`DeviceClassifier`] for their own
//! request metadata type.

// self
use crate::auth::DeviceClass;

/// Maps per-request metadata `M` onto a [`DeviceClass`].
pub trait DeviceClassifier<M: ?Sized>: Send + Sync {
	/// Classifies the device that sent the request.
	fn classify(&self, metadata: &M) -> DeviceClass;
}
impl<M, F> DeviceClassifier<M> for F
where
	M: ?Sized,
	F: Fn(&M) -> DeviceClass + Send + Sync,
{
	fn classify(&self, metadata: &M) -> DeviceClass {
		self(metadata)
	}
}

/// Classifier that reports the same class for every request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedDevice(pub DeviceClass);
impl<M: ?Sized> DeviceClassifier<M> for FixedDevice {
	fn classify(&self, _: &M) -> DeviceClass {
		self.0
	}
}
