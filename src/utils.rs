//! Small string helpers shared by the loader and printers.

const BOM: char = '\u{feff}';

/// Final path component: everything after the last `/` or `\`.
///
/// A trailing separator yields an empty name.
pub fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Drop a leading UTF-8 byte-order mark, if any.
pub fn strip_bom(s: &str) -> &str {
    s.strip_prefix(BOM).unwrap_or(s)
}
