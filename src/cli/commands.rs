use std::io::{self, Read, Write};
use std::path::Path;

use crate::app::{AppContext, Result};
use crate::domain::JsonFeed;

/// Reads the whole input, `-` meaning stdin.
fn read_input(input: &Path) -> Result<Vec<u8>> {
    if input == Path::new("-") {
        let mut buf = Vec::new();
        io::stdin().lock().read_to_end(&mut buf)?;
        return Ok(buf);
    }
    Ok(std::fs::read(input)?)
}

pub fn convert(ctx: &AppContext, input: &Path, output: Option<&Path>) -> Result<()> {
    let bytes = read_input(input)?;
    let feed = ctx.normalize(&bytes)?;
    let encoded = ctx.codec.encode(&feed);

    match output {
        Some(path) => {
            std::fs::write(path, &encoded)?;
            tracing::info!(
                "Wrote {} items from {} to {}",
                feed.item_count(),
                input.display(),
                path.display()
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&encoded)?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}

pub fn inspect(ctx: &AppContext, input: &Path) -> Result<()> {
    let bytes = read_input(input)?;
    let feed = ctx.read(&bytes)?;
    let format = feed.format_name();
    let normalized = ctx.normalizer.normalize(&feed);

    print!("{}", describe(format, &normalized));
    Ok(())
}

fn describe(format: &str, feed: &JsonFeed) -> String {
    let items = feed.items.as_deref().unwrap_or_default();
    let html = items.iter().filter(|i| i.content_html.is_some()).count();
    let text = items.iter().filter(|i| i.content_text.is_some()).count();

    let mut out = format!("{} ({})\n", feed.display_title(), format);
    if let Some(url) = &feed.home_page_url {
        out.push_str(&format!("  home:  {}\n", url));
    }
    if let Some(url) = &feed.feed_url {
        out.push_str(&format!("  feed:  {}\n", url));
    }
    out.push_str(&format!(
        "  items: {} ({} html, {} text)\n",
        items.len(),
        html,
        text
    ));
    if let Some(hubs) = &feed.hubs {
        out.push_str(&format!("  hubs:  {}\n", hubs.len()));
    }
    out
}
