//! Schema-to-Python type mapping for the Tornado server target.

/// Type names that are primitives in Python and need no import or model file.
pub const LANGUAGE_PRIMITIVES: &[&str] = &["int", "float", "list", "bool", "str", "datetime", "date"];

/// Schema type names and the Python types generated code uses for them.
pub const TYPE_MAPPING: &[(&str, &str)] = &[
    ("integer", "int"),
    ("long", "int"),
    ("float", "float"),
    ("double", "float"),
    ("number", "float"),
    ("array", "list"),
    ("map", "dict"),
    ("boolean", "bool"),
    ("string", "str"),
    ("date", "date"),
    ("DateTime", "datetime"),
    ("object", "object"),
    ("file", "file"),
];

/// Map a schema type to its Python type. `None` means the type is not in the
/// table and the host falls back to its default handling.
pub fn map_schema_type(schema_type: &str) -> Option<&'static str> {
    TYPE_MAPPING
        .iter()
        .find(|(from, _)| *from == schema_type)
        .map(|(_, to)| *to)
}

/// Whether `name` is one of the Python primitives generated code treats as
/// built in.
pub fn is_language_primitive(name: &str) -> bool {
    LANGUAGE_PRIMITIVES.contains(&name)
}
