mod shelf;
mod shelf_packer;
mod working_set;

#[doc(inline)]
pub use shelf::{ShelfState, ShelfStep};
#[doc(inline)]
pub use shelf_packer::{ShelfPacker, pack_sheets};
#[doc(inline)]
pub use working_set::{WorkItem, WorkingSet};
