use std::path::Path;

use anyhow::{Context, Result};

use crate::paging::PageItem;

pub fn write_page_list(path: &Path, items: &[PageItem]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
    writer.write_record(["page", "current", "link"])?;
    for item in items {
        writer.write_record([
            item.page_number.to_string(),
            item.is_current.to_string(),
            item.link.clone(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
