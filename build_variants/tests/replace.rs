//! Integration tests for post-merge key replacement.

use anyhow::{Result, ensure};
use build_variants::build_variants;
use rstest::rstest;
use serde_json::{Value, json};

fn debug_outline(value: &Value) -> Value {
    match value.as_str() {
        Some("true") => json!({"outline": "1px solid red"}),
        _ => json!({}),
    }
}

#[rstest]
fn replaces_matching_keys() -> Result<()> {
    let css = build_variants(&())
        .css(json!({"$debug": "true", "opacity": 0.5}))
        .replace("opacity", |value| {
            json!({"opacity": value, "MozOpacity": value})
        })
        .replace("$debug", debug_outline)
        .end()?;

    ensure!(css.get("$debug").is_none(), "$debug should be removed");
    ensure!(
        css == json!({"opacity": 0.5, "MozOpacity": 0.5, "outline": "1px solid red"}),
        "unexpected css {css:?}"
    );
    Ok(())
}

#[rstest]
fn absent_keys_are_left_alone() -> Result<()> {
    let css = build_variants(&())
        .css(json!({"color": "red"}))
        .replace("opacity", |_| json!({"hidden": true}))
        .end()?;

    ensure!(css == json!({"color": "red"}), "unexpected css {css:?}");
    Ok(())
}

#[rstest]
fn empty_replacement_drops_the_key() -> Result<()> {
    let css = build_variants(&())
        .css(json!({"$debug": "false", "color": "red"}))
        .replace("$debug", debug_outline)
        .end()?;

    ensure!(css == json!({"color": "red"}), "unexpected css {css:?}");
    Ok(())
}

#[rstest]
fn replacement_output_deep_merges() -> Result<()> {
    let css = build_variants(&())
        .css(json!({":hover": {"color": "red"}, "$hoverBg": "blue"}))
        .replace("$hoverBg", |value| json!({":hover": {"background": value}}))
        .end()?;

    ensure!(
        css == json!({":hover": {"color": "red", "background": "blue"}}),
        "unexpected css {css:?}"
    );
    Ok(())
}

#[rstest]
fn replaced_keys_move_to_the_end() -> Result<()> {
    let css = build_variants(&())
        .css(json!({"opacity": 0.5, "color": "red", "margin": 0}))
        .replace("opacity", |value| json!({"opacity": value}))
        .end()?;

    let keys: Vec<&str> = css.keys().map(String::as_str).collect();
    ensure!(
        keys == ["color", "margin", "opacity"],
        "unexpected key order {keys:?}"
    );
    Ok(())
}
