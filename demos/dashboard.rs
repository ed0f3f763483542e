//! Dashboard layout walkthrough: defines a five-column grid with a header
//! strip and a body column, then prints every area's rectangle before and
//! after a resize.

use gridpanel::{GridLayout, Result};

fn main() -> Result<()> {
    let mut grid = GridLayout::new();
    grid.set_columns_text("200px auto 2fr auto auto")?;
    grid.set_rows_text("30px auto auto")?;
    grid.define_areas(
        "header header right1 right1 right2\n\
         body . . . .\n\
         body . . . .",
    )?;

    for (width, height) in [(800.0, 600.0), (1024.0, 768.0)] {
        grid.set_available_size(width, height);
        println!("available {width}x{height}");
        for name in ["header", "right1", "right2", "body"] {
            let rect = grid.area_rect(name)?;
            println!(
                "  {name:>7}: left {:>6.1}  top {:>6.1}  {:>6.1} x {:>5.1}",
                rect.left, rect.top, rect.width, rect.height
            );
        }
    }

    Ok(())
}
