//! Integration tests for conditional scopes.

use anyhow::{Result, ensure};
use build_variants::VariantsBuilder;
use rstest::rstest;
use serde_json::json;

struct ButtonProps {
    kind: &'static str,
}

#[rstest]
fn only_enabled_scopes_contribute() -> Result<()> {
    let props = ButtonProps { kind: "success" };

    let css = VariantsBuilder::new(&props)
        .when(false, |b| {
            b.css(json!({"color": "white"}))
                .variant(
                    "type",
                    props.kind,
                    json!({"success": {"background": "green"}, "error": {"background": "red"}}),
                )
                .end()
        })
        .when(
            || true,
            |b| {
                b.css(json!({"color": "silver"}))
                    .variant(
                        "type",
                        props.kind,
                        json!({"success": {"background": "lime"}, "error": {"background": "orange"}}),
                    )
                    .end()
            },
        )
        .end()?;

    ensure!(
        css == json!({"color": "silver", "background": "lime"}),
        "unexpected css {css:?}"
    );
    Ok(())
}

#[rstest]
#[case(true, json!({"color": "grey"}))]
#[case(false, json!({}))]
fn nested_scopes_need_every_ancestor_enabled(
    #[case] outer: bool,
    #[case] expected: serde_json::Value,
) -> Result<()> {
    let css = VariantsBuilder::new(&())
        .when(outer, |b| {
            b.when(true, |inner| inner.css(json!({"color": "grey"})).end())
                .end()
        })
        .end()?;

    ensure!(css == expected, "unexpected css {css:?}");
    Ok(())
}

#[rstest]
fn conditions_can_read_props() -> Result<()> {
    let props = vec!["focused"];
    let css = VariantsBuilder::new(&props)
        .when(props.contains(&"focused"), |b| {
            b.css(json!({"outline": "2px solid"})).end()
        })
        .when(|| props.contains(&"loading"), |b| {
            b.css(json!({"cursor": "wait"})).end()
        })
        .end()?;

    ensure!(
        css == json!({"outline": "2px solid"}),
        "unexpected css {css:?}"
    );
    Ok(())
}
