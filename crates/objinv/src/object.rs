use std::borrow::Cow;

/// A documented symbol that can be listed in an inventory.
///
/// Implementors are cheap handles (`Clone` is expected to be inexpensive):
/// the writer clones them onto its traversal stack. Children are owned by
/// whatever backs the handle; `parent` is only used to qualify names.
pub trait DocumentedObject: Clone {
    /// Raw kind tag such as `"module"` or `"method"`, if the object has one.
    fn kind(&self) -> Option<&str>;

    /// Local (unqualified) name.
    fn name(&self) -> &str;

    /// Fully-qualified dotted name, unique across the documented tree.
    fn full_name(&self) -> Cow<'_, str>;

    /// The immediately enclosing object, if any.
    fn parent(&self) -> Option<Self>;

    /// Children in documentation order.
    fn ordered_contents(&self) -> Vec<Self>;
}
