use super::*;

fn photo(id: &str, album: &str) -> Photo {
    Photo {
        id: id.to_string(),
        source: format!("https://cdn.example/{id}.jpg"),
        alt: id.to_string(),
        aspect_tag: "square".to_string(),
        album: album.to_string(),
    }
}

fn catalog() -> Vec<Photo> {
    vec![
        photo("a1", "Alpine"),
        photo("a2", "Alpine"),
        photo("c1", "Coastal"),
        photo("c2", "Coastal"),
    ]
}

#[test]
fn open_defaults_the_filter_to_the_first_album() {
    let mut viz = Visualizer::open(&[], catalog());
    viz.open_picker(false);
    let state = viz.picker().unwrap();
    assert!(!state.multi_select());
    assert!(state.pending_selections().is_empty());
    assert_eq!(state.album_filter(), "Alpine");
}

#[test]
fn open_with_an_album_free_catalog_shows_everything() {
    let loose = vec![photo("x", ""), photo("y", "")];
    let mut viz = Visualizer::open(&[], loose);
    viz.open_picker(false);
    assert_eq!(viz.picker().unwrap().album_filter(), "");
    assert_eq!(viz.visible_photos().len(), 2);
}

#[test]
fn visible_photos_follow_the_album_filter() {
    let mut viz = Visualizer::open(&[], catalog());
    assert!(viz.visible_photos().is_empty());

    viz.open_picker(true);
    let ids: Vec<_> = viz.visible_photos().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["a1", "a2"]);

    viz.set_album_filter("Coastal");
    let ids: Vec<_> = viz.visible_photos().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["c1", "c2"]);

    viz.set_album_filter("");
    assert_eq!(viz.visible_photos().len(), 4);
}

#[test]
fn set_album_filter_while_closed_is_ignored() {
    let mut viz = Visualizer::open(&[], catalog());
    viz.set_album_filter("Coastal");
    assert!(viz.picker().is_none());
}

#[test]
fn toggle_selection_adds_then_removes_in_multi_mode() {
    let mut viz = Visualizer::open(&[], catalog());
    viz.open_picker(true);

    viz.toggle_selection("c1");
    viz.toggle_selection("a1");
    assert_eq!(viz.picker().unwrap().pending_selections(), ["c1", "a1"]);

    viz.toggle_selection("c1");
    assert_eq!(viz.picker().unwrap().pending_selections(), ["a1"]);
}

#[test]
fn toggle_selection_is_rejected_in_single_mode() {
    let mut viz = Visualizer::open(&[], catalog());
    viz.open_picker(false);
    viz.toggle_selection("a1");
    assert!(viz.picker().unwrap().pending_selections().is_empty());
}

#[test]
fn confirm_single_swaps_the_selected_frame() {
    let seed = [photo("a1", "Alpine")];
    let mut viz = Visualizer::open(&seed, catalog());
    let id = viz.selected_frame_id().unwrap().to_string();

    viz.open_picker(false);
    viz.confirm_single(&photo("c1", "Coastal"));

    assert!(viz.picker().is_none());
    let frame = viz.composition().frame(&id).unwrap();
    assert_eq!(frame.photo.id, "c1");
    assert_eq!(viz.composition().len(), 1);
}

#[test]
fn confirm_single_adds_when_nothing_is_selected() {
    let seed = [photo("a1", "Alpine")];
    let mut viz = Visualizer::open(&seed, catalog());
    viz.select_frame(None);

    viz.open_picker(false);
    viz.confirm_single(&photo("c1", "Coastal"));

    assert!(viz.picker().is_none());
    assert_eq!(viz.composition().len(), 2);
}

#[test]
fn confirm_single_is_rejected_in_multi_mode() {
    let mut viz = Visualizer::open(&[], catalog());
    viz.open_picker(true);
    viz.confirm_single(&photo("c1", "Coastal"));
    assert!(viz.picker().is_some());
    assert!(viz.composition().is_empty());
}

#[test]
fn confirm_batch_appends_pending_in_selection_order() {
    let seed = [photo("a1", "Alpine")];
    let mut viz = Visualizer::open(&seed, catalog());
    viz.open_picker(true);
    viz.toggle_selection("c2");
    viz.toggle_selection("c1");
    viz.confirm_batch();

    assert!(viz.picker().is_none());
    let comp = viz.composition();
    assert_eq!(comp.len(), 3);
    assert_eq!(comp.frames[1].photo.id, "c2");
    assert_eq!(comp.frames[2].photo.id, "c1");
    // Appended frames continue the existing row.
    assert_eq!(comp.frames[1].position.x, 0.0);
    assert_eq!(comp.frames[2].position.x, 250.0);
    assert!(viz.can_undo());
}

#[test]
fn confirm_batch_skips_ids_gone_from_the_catalog() {
    let mut viz = Visualizer::open(&[], catalog());
    viz.open_picker(true);
    viz.toggle_selection("a1");
    viz.toggle_selection("ghost");
    viz.confirm_batch();

    let comp = viz.composition();
    assert_eq!(comp.len(), 1);
    assert_eq!(comp.frames[0].photo.id, "a1");
}

#[test]
fn confirm_batch_with_nothing_pending_leaves_the_picker_open() {
    let mut viz = Visualizer::open(&[], catalog());
    viz.open_picker(true);
    viz.confirm_batch();
    assert!(viz.picker().is_some());
    assert!(viz.composition().is_empty());
    assert!(!viz.can_undo());
}

#[test]
fn close_picker_discards_pending_without_touching_the_wall() {
    let seed = [photo("a1", "Alpine")];
    let mut viz = Visualizer::open(&seed, catalog());
    viz.open_picker(true);
    viz.toggle_selection("c1");
    viz.close_picker();

    assert!(viz.picker().is_none());
    assert_eq!(viz.composition().len(), 1);
    assert!(!viz.can_undo());
}

#[test]
fn open_picker_is_rejected_during_preview() {
    let mut viz = Visualizer::open(&[], catalog());
    viz.enter_preview();
    viz.open_picker(true);
    assert!(viz.picker().is_none());
}
