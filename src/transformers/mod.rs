/*! Document transformers.

Transforms documents by canonicalizing or removing content.

!*/

mod noise_header;
mod normalize;
mod transform;

pub use noise_header::strip_noise_header;
pub use noise_header::StripNoiseHeader;
pub use normalize::normalize;
pub use normalize::Normalize;
pub use transform::Transform;
