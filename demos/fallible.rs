//! Shows how a failing component is isolated from the rest of the tree, and how a host can apply
//! its own render configuration.

use anyhow::{bail, Context};
use vtree::prelude::*;

#[component]
fn Price(props: &Props) -> anyhow::Result<Renderable> {
    let cents = props
        .get("cents")
        .and_then(PropValue::as_number)
        .context("no price available")?
        .get();
    if cents < 0.0 {
        bail!("negative price: {}", cents);
    }
    Ok(format!("${:.2}", cents / 100.0).into())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let tree = element! {
        table {
            tr {
                td { "Coffee" }
                td { Price(cents: 350) }
            }
            tr {
                td { "Mystery" }
                td { Price }
            }
            tr {
                td { "Refund" }
                td { Price(cents: -100) }
            }
        }
    };

    let config: RenderConfig = match std::env::args().nth(1) {
        Some(indent) => RenderConfig::default().with_indent_width(indent.parse()?),
        None => RenderConfig::default(),
    };
    let out = Renderer::new(config).render(tree)?;
    println!("{}", out);
    Ok(())
}
