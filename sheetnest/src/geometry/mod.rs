/// Glue flaps generated along the edges of unrolled outlines
pub mod flaps;
pub mod geo_traits;
pub mod primitives;

mod transformation;

#[doc(inline)]
pub use transformation::Transformation;
