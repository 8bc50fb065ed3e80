//! Terminal rendering of the status board.

use crate::models::view::SessionView;
use crate::utils::colors::color_for_status;
use crate::utils::table::{Column, Table};

const STATUS_COL: usize = 1;

pub fn render_board(views: &[SessionView], separator: &str) -> String {
    let mut table = Table::new(
        vec![
            Column::new("Name"),
            Column {
                header: "Status".into(),
                min_width: 11,
            },
            Column::new("In"),
            Column::new("Out"),
            Column::new("Elapsed"),
            Column::new("Lunch"),
        ],
        separator,
    );

    for v in views {
        table.add_row(vec![
            v.person_name.clone(),
            v.status_label.clone(),
            v.start.clone().unwrap_or_else(|| "--:--".into()),
            v.end.clone().unwrap_or_else(|| "--:--".into()),
            v.elapsed.clone(),
            v.lunch_info.clone(),
        ]);
    }

    table.render_styled(|row, col| {
        if col == STATUS_COL {
            views.get(row).map(|v| color_for_status(v.status))
        } else {
            None
        }
    })
}
