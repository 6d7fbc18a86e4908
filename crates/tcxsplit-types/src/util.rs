/// Render a number the way rewritten fields are written: shortest
/// round-trip decimal, always with a fractional part (`60.0`, `40.5`).
pub fn format_decimal(value: f64) -> String {
    format!("{:?}", value)
}
