use crate::PlayArea;

/// Draws the play area as a grid of card codes, one row per y coordinate.
pub fn visualize_area(area: &PlayArea) -> String {
    let Some(bbox) = area.bbox() else {
        return String::from("(empty play area)");
    };
    let border = "───".repeat(bbox.width() as usize);

    // The x coordinate of the leftmost column, followed by the top of the box
    let mut result = format!("    {:>3}\n    ╭{}╮\n", bbox.x_min, border);
    for y in bbox.y_min..=bbox.y_max {
        result += &format!("{:>3} │", y);
        for x in bbox.x_min..=bbox.x_max {
            match area.get(x, y) {
                Some(card) => result += &format!("{} ", card),
                None => result += "   ",
            }
        }
        result += "│\n";
    }
    result += &format!("    ╰{}╯", border);
    result
}
