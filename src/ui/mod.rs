//! UI module for rendering the wizard

mod components;
mod configure;
mod layout;
mod preview;
mod select;
mod theme;

use crate::app::App;
use crate::state::Stage;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area) = layout::create_layout(frame.area());

    layout::draw_breadcrumb(frame, header_area, app);

    match app.session.stage {
        Stage::SelectingFields => select::draw(frame, main_area, app),
        Stage::ConfiguringFields => configure::draw(frame, main_area, app),
        Stage::ConfiguringTheme => theme::draw(frame, main_area, app),
        Stage::Previewing => preview::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);
}
