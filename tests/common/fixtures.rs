use serde_json::{json, Value};

/// The large centered page heading from the playground's starter layout.
pub fn hero_heading() -> Value {
    json!({
        "fontSizePx": 56,
        "fontWeight": 800,
        "textAlign": "center",
        "textColor": "#ffffff",
        "backgroundColor": "transparent",
        "paddingSpec": "20px",
        "marginSpec": "0px 0px 16px 0px",
        "borderRadiusPx": 0,
        "width": "100%",
        "height": "auto"
    })
}

/// A centered call-to-action button.
pub fn cta_button() -> Value {
    json!({
        "fontSizePx": 18,
        "fontWeight": 600,
        "textAlign": "center",
        "textColor": "#ffffff",
        "backgroundColor": "#6366f1",
        "paddingSpec": "12px 32px",
        "marginSpec": "0px auto 48px auto",
        "borderRadiusPx": 8,
        "width": "auto",
        "height": "auto"
    })
}

/// A card with a brand-tinted shadow and a light gray border.
pub fn shadow_card() -> Value {
    json!({
        "fontSizePx": 16,
        "fontWeight": 400,
        "textAlign": "left",
        "textColor": "#1f2937",
        "backgroundColor": "#ffffff",
        "paddingSpec": "24px",
        "marginSpec": "0px",
        "borderRadiusPx": 12,
        "width": "320px",
        "height": "auto",
        "boxShadow": "0 10px 15px -3px rgba(99, 102, 241, 0.3)",
        "border": "1px solid #e5e7eb"
    })
}

/// Same as `hero_heading` with one field replaced.
pub fn hero_with(field: &str, value: Value) -> Value {
    let mut json = hero_heading();
    json[field] = value;
    json
}
