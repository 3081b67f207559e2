mod footprint;
mod instance;
mod keyed_rect;
mod part;
mod placement;
mod sheet;

#[doc(inline)]
pub use footprint::OrientedFootprint;
#[doc(inline)]
pub use instance::Instance;
#[doc(inline)]
pub use keyed_rect::{KeyedRect, RectKey};
#[doc(inline)]
pub use part::{Part, RotationMode};
#[doc(inline)]
pub use placement::{OversizedPart, PackResult, Placement};
#[doc(inline)]
pub use sheet::{DEFAULT_SPACING, Sheet, SheetSpec};
