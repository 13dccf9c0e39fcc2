// SPDX-License-Identifier: MPL-2.0
//! The scrollable card grid.
//!
//! Cards map 1:1 to submissions in manifest order. Column count follows
//! the window width; the entrance reveal shows cards progressively after
//! a load, staggered by index.

use crate::app::Message;
use crate::gallery::LoadedSubmission;
use crate::i18n::fluent::I18n;
use crate::ui::card;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::widgets::SparklePool;
use iced::widget::{column, container, row, scrollable, Column, Row};
use iced::{Element, Length};

/// Horizontal room one card occupies, including the grid gutter.
const CARD_SLOT: f32 = sizing::CARD_WIDTH + spacing::LG;

/// Number of columns for a given window width.
#[must_use]
pub fn column_count(window_width: f32) -> usize {
    ((window_width / CARD_SLOT) as usize).max(1)
}

/// Renders the grid of the first `revealed` submissions.
pub fn view<'a>(
    submissions: &'a [LoadedSubmission],
    i18n: &'a I18n,
    sparkles: &'a SparklePool,
    revealed: usize,
    window_width: f32,
) -> Element<'a, Message> {
    let columns = column_count(window_width);
    let shown = &submissions[..revealed.min(submissions.len())];

    let mut grid: Column<'a, Message> = column![].spacing(spacing::LG);
    for (row_index, chunk) in shown.chunks(columns).enumerate() {
        let mut cards: Row<'a, Message> = row![].spacing(spacing::LG);
        for (column_index, submission) in chunk.iter().enumerate() {
            let index = row_index * columns + column_index;
            cards = cards.push(card::view(index, submission, i18n, sparkles));
        }
        grid = grid.push(cards);
    }

    scrollable(
        container(grid)
            .width(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center)
            .padding(spacing::LG),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_windows_keep_one_column() {
        assert_eq!(column_count(100.0), 1);
        assert_eq!(column_count(CARD_SLOT - 1.0), 1);
    }

    #[test]
    fn column_count_grows_with_width() {
        assert_eq!(column_count(CARD_SLOT * 2.0), 2);
        assert_eq!(column_count(CARD_SLOT * 3.5), 3);
    }
}
