//! Pure transformations over decoded item lists.
//!
//! Nothing here performs I/O: body decoding, URL and status validation, and
//! the ordering policies.

mod decode;
mod ordering;
mod validation;

pub use decode::decode_records;
pub use ordering::{
    ITEM_PREFIX, OrderingPolicy, group_by_list_id, is_displayable, name_sort_key, order,
};
pub use validation::{is_success, validate_url};
