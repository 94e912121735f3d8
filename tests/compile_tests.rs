mod common;

use classwright::{compile, ColorValue, Compiler};
use common::fixtures::*;
use common::{init_logging, record, tokens_of, TestResult};
use serde_json::json;

#[test]
fn test_hero_heading() -> TestResult {
    init_logging();

    let style = record(hero_heading())?;
    assert_eq!(
        compile(&style),
        "text-6xl font-extrabold text-center text-[#ffffff] p-5 m-[0px 0px 16px 0px] w-full"
    );
    Ok(())
}

#[test]
fn test_button_with_auto_margin() -> TestResult {
    init_logging();

    let style = record(cta_button())?;
    let out = compile(&style);
    assert_eq!(
        out,
        "text-lg font-semibold text-center text-[#ffffff] bg-[#6366f1] p-[12px 32px] mx-auto rounded-lg"
    );
    assert!(!out.contains("m-["));
    Ok(())
}

#[test]
fn test_indigo_shadow_emits_pair_in_order() -> TestResult {
    init_logging();

    let style = record(shadow_card())?;
    let tokens = tokens_of(&style);
    assert_eq!(
        tokens,
        vec![
            "text-base",
            "font-normal",
            "text-left",
            "text-[#1f2937]",
            "bg-[#ffffff]",
            "p-6",
            "rounded-xl",
            "w-[320px]",
            "shadow-lg",
            "shadow-indigo-500/50",
            "border",
            "border-gray-200",
        ]
    );
    Ok(())
}

#[test]
fn test_transparent_colors_never_emit() -> TestResult {
    for fixture in [hero_heading(), cta_button(), shadow_card()] {
        let mut style = record(fixture)?;
        style.text_color = ColorValue::Transparent;
        style.background_color = ColorValue::Transparent;
        let tokens = tokens_of(&style);
        assert!(tokens.iter().all(|t| !t.starts_with("text-[#") && !t.starts_with("bg-")));
    }
    Ok(())
}

#[test]
fn test_zero_values_collapse() -> TestResult {
    let style = record(json!({
        "fontSizePx": 16,
        "fontWeight": 400,
        "textAlign": "left",
        "textColor": "transparent",
        "backgroundColor": "transparent",
        "paddingSpec": "0px",
        "marginSpec": "0px",
        "borderRadiusPx": 0,
        "width": "auto",
        "height": "auto"
    }))?;
    assert_eq!(compile(&style), "text-base font-normal text-left");
    Ok(())
}

#[test]
fn test_auto_margin_anywhere() -> TestResult {
    for margin in ["auto", "0px auto", "16px auto 0px", "0px auto 48px auto"] {
        let style = record(hero_with("marginSpec", json!(margin)))?;
        let tokens = tokens_of(&style);
        let margin_tokens: Vec<_> = tokens
            .iter()
            .filter(|t| t.starts_with("m-") || t.starts_with("mx-"))
            .collect();
        assert_eq!(margin_tokens, vec!["mx-auto"], "margin spec {:?}", margin);
    }
    Ok(())
}

#[test]
fn test_off_table_font_size_falls_back() -> TestResult {
    let style = record(hero_with("fontSizePx", json!(27)))?;
    let tokens = tokens_of(&style);
    assert_eq!(tokens[0], "text-[27px]");
    // No rounding to a neighbouring table entry.
    assert!(!tokens.contains(&"text-2xl".to_string()));
    assert!(!tokens.contains(&"text-3xl".to_string()));
    Ok(())
}

#[test]
fn test_fractional_pixels_round_trip_exactly() -> TestResult {
    let mut json = hero_with("fontSizePx", json!(16.000001));
    json["borderRadiusPx"] = json!(10.25);
    let tokens = tokens_of(&record(json)?);
    assert_eq!(tokens[0], "text-[16.000001px]");
    assert!(tokens.contains(&"rounded-[10.25px]".to_string()));
    Ok(())
}

#[test]
fn test_blank_values_leave_no_empty_brackets() -> TestResult {
    let style = record(json!({
        "fontSizePx": 16,
        "fontWeight": 400,
        "textAlign": "left",
        "textColor": "",
        "backgroundColor": "   ",
        "paddingSpec": "",
        "marginSpec": "  ",
        "borderRadiusPx": 0,
        "width": "",
        "height": " "
    }))?;
    let out = compile(&style);
    assert_eq!(out, "text-base font-normal text-left");
    assert!(!out.contains('['));
    Ok(())
}

#[test]
fn test_malformed_values_pass_through() -> TestResult {
    let style = record(json!({
        "fontSizePx": 15,
        "fontWeight": 700,
        "textAlign": "right",
        "textColor": "rebeccapurple",
        "backgroundColor": "rgb(0 0 0 / 50%)",
        "paddingSpec": "1rem",
        "marginSpec": "4px",
        "borderRadiusPx": 5,
        "width": "fit-content",
        "height": "calc(100vh - 64px)"
    }))?;
    assert_eq!(
        compile(&style),
        "text-[15px] font-bold text-right text-[rebeccapurple] bg-[rgb(0 0 0 / 50%)] \
         p-[1rem] m-1 rounded-[5px] w-[fit-content] h-[calc(100vh - 64px)]"
    );
    Ok(())
}

#[test]
fn test_compile_is_deterministic() -> TestResult {
    let compiler = Compiler::new();
    for fixture in [hero_heading(), cta_button(), shadow_card()] {
        let style = record(fixture)?;
        let first = compiler.compile(&style);
        for _ in 0..5 {
            assert_eq!(compiler.compile(&style), first);
        }
        assert_eq!(compile(&style), first);
    }
    Ok(())
}

#[test]
fn test_concurrent_callers_share_one_compiler() -> TestResult {
    let compiler = Compiler::new();
    let style = record(shadow_card())?;
    let expected = compiler.compile(&style);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| compiler.compile(&style)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
    Ok(())
}

#[test]
fn test_unrecognized_weight_is_skipped() -> TestResult {
    init_logging();

    let style = record(hero_with("fontWeight", json!(450)))?;
    let tokens = tokens_of(&style);
    assert!(tokens.iter().all(|t| !t.starts_with("font-")));
    assert_eq!(tokens[1], "text-center");
    Ok(())
}
