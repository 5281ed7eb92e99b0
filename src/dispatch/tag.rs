//! Tag assignment.
//!
//! Every data type names exactly one tag. The tag, not the concrete type,
//! is the key under which concept implementations are registered, so many
//! types can share one set of implementations.

/// Associates a type with its tag.
///
/// Implement it by hand, or derive it:
///
/// ```
/// use tola_concepts::Tagged;
/// use tola_concepts::dispatch::tag_name;
///
/// pub struct Meters;
///
/// #[derive(Tagged)]
/// #[tag(Meters)]
/// struct Length(f64);
///
/// // Without `#[tag]` the type is its own tag.
/// #[derive(Tagged)]
/// struct Standalone;
///
/// assert!(tag_name::<Length>().ends_with("Meters"));
/// assert!(tag_name::<Standalone>().ends_with("Standalone"));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no tag",
    label = "`{Self}` does not implement `Tagged`",
    note = "derive `Tagged` or implement it to register `{Self}` with a data kind"
)]
pub trait Tagged {
    type Tag;
}

/// The tag of `T`.
pub type TagOf<T> = <T as Tagged>::Tag;

/// Name of the tag of `T`, for diagnostics and reports.
pub fn tag_name<T: Tagged>() -> &'static str {
    core::any::type_name::<TagOf<T>>()
}

/// Name of the tag of `value`.
///
/// ```
/// use tola_concepts::dispatch::tag_name_of;
///
/// assert!(tag_name_of(&7u8).ends_with("IntegerTag<u8>"));
/// assert!(tag_name_of(&(1u8, 'c')).ends_with("TupleTag"));
/// ```
pub fn tag_name_of<T: Tagged>(_value: &T) -> &'static str {
    tag_name::<T>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ext::{BoolTag, HListTag};
    use crate::hlist;

    #[test]
    fn test_tag_name_of_value() {
        assert_eq!(tag_name_of(&true), core::any::type_name::<BoolTag>());
        assert_eq!(tag_name_of(&hlist![1u8, 'c']), tag_name::<crate::primitives::HNil>());
        assert_eq!(tag_name_of(&hlist![()]), core::any::type_name::<HListTag>());
    }
}
