//! Integration tests for compound variants composed from earlier definitions.

mod common;

use anyhow::{Result, ensure};
use build_variants::{Resolvers, VariantsBuilder};
use common::styles::{border_styles, font_styles, type_styles};
use rstest::rstest;
use serde_json::{Value, json};

fn color_atoms() -> Value {
    json!({
        "unset": {},
        "red": {"color": "red", "opacity": 0.9},
        "lime": {"color": "lime"}
    })
}

#[rstest]
fn absent_value_applies_no_compound() -> Result<()> {
    let kind: Option<&str> = None;
    let css = VariantsBuilder::new(&kind)
        .compound_variant(
            "type",
            kind,
            Resolvers::new()
                .on("success", |b| b.css(json!({"color": "green"})).end())
                .on("error", |b| b.css(json!({"color": "red"})).end()),
        )
        .end()?;

    ensure!(css.get("color").is_none(), "unexpected css {css:?}");
    Ok(())
}

#[derive(Debug)]
struct StatusProps {
    kind: Option<&'static str>,
    border: Option<&'static str>,
    important: Option<bool>,
    variant: &'static str,
}

#[rstest]
fn composes_from_existing_variants() -> Result<()> {
    let props = StatusProps {
        kind: None,
        border: Some("solid"),
        important: None,
        variant: "ko",
    };

    let css = VariantsBuilder::new(&props)
        .variant("type", props.kind.unwrap_or("default"), type_styles())
        .when(false, |b| {
            b.variant("border", props.border.unwrap_or("unset"), border_styles())
                .end()
        })
        .variant(
            "important",
            props.important.unwrap_or(false),
            json!({"true": {"textDecorationLine": "underline"}, "false": {}}),
        )
        .compound_variant(
            "variant",
            props.variant,
            Resolvers::new()
                .on("ok", |b| {
                    b.get("type", "success")
                        .get("border", "solid")
                        .get("important", false)
                        .end()
                })
                .on("ko", |b| {
                    b.get("type", "error")
                        .get("border", "dotted")
                        .get("important", true)
                        .css(json!({"color": "pink"}))
                        .end()
                }),
        )
        .end()?;

    // Definitions made in the disabled scope stay available to `get`.
    ensure!(
        css == json!({
            "color": "pink",
            "background": "red",
            "textDecorationLine": "underline",
            "border": "1px solid dotted"
        }),
        "unexpected css {css:?}"
    );
    Ok(())
}

#[rstest]
fn composes_from_earlier_compound_variants() -> Result<()> {
    let variant = "variant2";

    let css = VariantsBuilder::new(&variant)
        .variant("color", "unset", color_atoms())
        .variant("font", "unset", font_styles())
        .when(false, |b| b.variant("border", "unset", border_styles()).end())
        .compound_variant(
            "style",
            "unset",
            Resolvers::new()
                .on("unset", |b| b.end())
                .on("style1", |b| b.get("color", "red").get("font", "strong").end())
                .on("style2", |b| b.get("color", "lime").get("font", "italic").end()),
        )
        .compound_variant(
            "variant",
            variant,
            Resolvers::new()
                .on("unset", |b| b.end())
                .on("variant1", |b| b.get("style", "style1").end())
                .on("variant2", |b| {
                    b.get("style", "style2")
                        .css(json!({"background": "pink"}))
                        .end()
                }),
        )
        .end()?;

    ensure!(
        css == json!({
            "color": "lime",
            "textDecoration": "italic",
            "background": "pink"
        }),
        "unexpected css {css:?}"
    );
    Ok(())
}

#[rstest]
fn absent_list_applies_no_compound() -> Result<()> {
    let variants: Option<Vec<&str>> = None;
    let css = VariantsBuilder::new(&variants)
        .compound_variants(
            "variants",
            variants.clone().unwrap_or_default(),
            Resolvers::new()
                .on("variant1", |b| b.css(json!({"color": "blue"})).end())
                .on("variant2", |b| b.css(json!({"color": "red"})).end()),
        )
        .end()?;

    ensure!(css.is_empty(), "unexpected css {css:?}");
    Ok(())
}

#[derive(Debug)]
struct BoxProps {
    style: Option<&'static str>,
    disabled: Option<bool>,
    variants: Option<Vec<&'static str>>,
}

#[rstest]
fn list_compounds_merge_every_selected_value() -> Result<()> {
    let props = BoxProps {
        style: None,
        disabled: None,
        variants: Some(vec!["variant1", "variant2"]),
    };

    let css = VariantsBuilder::new(&props)
        .variant("color", "unset", color_atoms())
        .variant("font", "unset", font_styles())
        .when(false, |b| b.variant("border", "unset", border_styles()).end())
        .compound_variant(
            "style",
            props.style.unwrap_or("unset"),
            Resolvers::new()
                .on("unset", |b| b.end())
                .on("style1", |b| b.get("color", "red").get("font", "strong").end())
                .on("style2", |b| b.get("color", "lime").get("font", "italic").end()),
        )
        .compound_variant(
            "disabled",
            props.disabled.unwrap_or(false),
            Resolvers::new()
                .on(true, |b| b.css(json!({"textDecorationLine": "overline"})).end())
                .on(false, |b| b.end()),
        )
        .compound_variants(
            "variants",
            props.variants.clone().unwrap_or_else(|| vec!["unset"]),
            Resolvers::new()
                .on("unset", |b| b.end())
                .on("variant1", |b| b.get("style", "style1").end())
                .on("variant2", |b| {
                    b.get("style", "style2")
                        .get("disabled", true)
                        .css(json!({"background": "pink"}))
                        .end()
                }),
        )
        .end()?;

    ensure!(
        css == json!({
            "color": "lime",
            "opacity": 0.9,
            "fontWeight": "bold",
            "textDecoration": "italic",
            "textDecorationLine": "overline",
            "background": "pink"
        }),
        "unexpected css {css:?}"
    );
    ensure!(css.get("border").is_none(), "border was never selected");
    Ok(())
}

#[rstest]
fn resolvers_run_for_unselected_variants() -> Result<()> {
    let mut builder = VariantsBuilder::new(&());
    builder.compound_variant(
        "tone",
        "calm",
        Resolvers::new()
            .on("calm", |b| b.css(json!({"color": "blue"})).end())
            .on("loud", |b| b.css(json!({"color": "red"})).end()),
    );

    let registry = builder.registry();
    ensure!(
        registry.lookup("tone", "loud").is_some(),
        "unselected resolver output was not recorded"
    );
    ensure!(
        builder.end()? == json!({"color": "blue"}),
        "only the selected compound should apply"
    );
    Ok(())
}
