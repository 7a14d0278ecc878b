use std::{io::{self, Write}, path::Path};
use log::debug;

use crate::{error::Result, models::item::Item, parsing::item_line::parse_item_line};

///Reads an item list where every non-blank line is `"name" appId [currencyId]`.
///
///The first line that doesn't follow that layout aborts the read with `MarketError::Format`.
pub async fn read_items_from_file(path: impl AsRef<Path>) -> Result<Vec<Item>> {
    let path = path.as_ref();
    let data = tokio::fs::read_to_string(path).await?;

    let items = data.lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_item_line)
        .collect::<Result<Vec<Item>>>()?;

    debug!("Read {} items from {}", items.len(), path.display());
    Ok(items)
}

/// `"name" | lowestPrice | medianPrice | volume`, unknown values left empty.
pub fn format_item_line(item: &Item) -> String {
    format!("\"{}\" | {} | {} | {}",
        item.name(),
        item.lowest_price().unwrap_or(""),
        item.median_price().unwrap_or(""),
        item.volume().map(|v| v.to_string()).unwrap_or_default(),
    )
}

///Overwrites `path` with one `format_item_line` per item, no trailing newline.
pub async fn save_items_to_file<I: AsRef<[Item]> + ?Sized>(path: impl AsRef<Path>, items: &I) -> Result<()> {
    let path = path.as_ref();
    let items: &[Item] = items.as_ref();

    let data = items.iter()
        .map(format_item_line)
        .collect::<Vec<String>>()
        .join("\n");

    tokio::fs::write(path, data).await?;

    debug!("Saved {} items to {}", items.len(), path.display());
    Ok(())
}

pub fn write_items<W: Write, I: AsRef<[Item]> + ?Sized>(out: &mut W, items: &I) -> io::Result<()> {
    for item in items.as_ref() {
        writeln!(out, "{}", item)?;
    }
    Ok(())
}

/// Prints each item's `Display` form on its own line to stdout.
pub fn print_items<I: AsRef<[Item]> + ?Sized>(items: &I) {
    if let Err(e) = write_items(&mut io::stdout().lock(), items) {
        debug!("Failed printing items to stdout: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_with_all_fields() {
        let mut item = Item::new("Example Item", 0).unwrap();
        item.set_lowest_price(Some("0.05$".into())).unwrap();
        item.set_median_price(Some("0.03$".into())).unwrap();
        item.set_volume(Some(108));

        assert_eq!(format_item_line(&item), r#""Example Item" | 0.05$ | 0.03$ | 108"#);
    }

    #[test]
    fn line_with_unknown_fields() {
        let mut item = Item::new("Example Item", 730).unwrap();
        assert_eq!(format_item_line(&item), r#""Example Item" |  |  | "#);

        item.set_volume(Some(0));
        assert_eq!(format_item_line(&item), r#""Example Item" |  |  | 0"#);
    }

    #[test]
    fn write_items_one_line_each() {
        let a = Item::new("Item 1", 730).unwrap();
        let b = Item::with_currency("Item 2", 570, 3).unwrap();

        let mut out = Vec::new();
        write_items(&mut out, &vec![a.clone(), b.clone()]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n{}\n", a, b));

        let mut single = Vec::new();
        write_items(&mut single, &a).unwrap();
        assert_eq!(String::from_utf8(single).unwrap().lines().count(), 1);

        let mut none = Vec::new();
        write_items(&mut none, &Vec::<Item>::new()).unwrap();
        assert!(none.is_empty());
    }
}
