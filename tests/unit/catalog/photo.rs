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

#[test]
fn album_names_are_distinct_in_first_seen_order() {
    let catalog = vec![
        photo("a", "Iceland"),
        photo("b", "Street"),
        photo("c", "Iceland"),
        photo("d", "Portraits"),
    ];
    assert_eq!(album_names(&catalog), ["Iceland", "Street", "Portraits"]);
}

#[test]
fn album_names_skip_empty_albums() {
    let catalog = vec![photo("a", ""), photo("b", "Street"), photo("c", "")];
    assert_eq!(album_names(&catalog), ["Street"]);
}

#[test]
fn album_names_of_empty_catalog_is_empty() {
    assert!(album_names(&[]).is_empty());
}
