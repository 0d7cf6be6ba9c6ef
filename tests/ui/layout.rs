use ratatui::layout::Rect;
use satdb::ui::layout::{LayoutManager, ADD_FORM_HEIGHT};

#[test]
fn test_app_layout_regions() {
    let area = Rect::new(0, 0, 120, 40);
    let layout = LayoutManager::app_layout(area);

    assert_eq!(layout.title.height, 1);
    assert_eq!(layout.status.height, 1);
    assert_eq!(layout.status.y, 39);
    assert_eq!(layout.component_list.height, 38);
    assert_eq!(layout.component_list.width + layout.add_form.width, 120);
    assert!(layout.component_list.width > layout.add_form.width);
    assert_eq!(layout.add_form.height, ADD_FORM_HEIGHT);
    assert_eq!(layout.add_form.x, layout.subsystems.x);
    assert_eq!(layout.subsystems.y, layout.add_form.y + ADD_FORM_HEIGHT);
}

#[test]
fn test_centered_rect_lines() {
    let area = Rect::new(0, 0, 100, 50);
    let popup = LayoutManager::centered_rect_lines(50, 7, area);

    assert_eq!(popup.height, 7);
    assert_eq!(popup.width, 50);
    assert_eq!(popup.x, 25);
    assert!(popup.bottom() <= area.bottom());
}
