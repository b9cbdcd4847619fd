use miette::Result;

/// Conversion from a raw deserialized configuration table into its
/// validated counterpart.
///
/// Field-level checks that cannot be expressed through serde alone,
/// such as parsing tracing filter directives or consulting environment
/// variables, live in each table's [`resolve`][Self::resolve].
pub(crate) trait ResolvableConfiguration {
    type Resolved;

    fn resolve(self) -> Result<Self::Resolved>;
}
