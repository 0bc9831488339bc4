use card_pdf::{PageGeometry, Quadrant, PAGE_HEIGHT, PAGE_WIDTH};

#[test]
fn test_default_page_size() {
    let geom = PageGeometry::default();
    assert_eq!(geom.width, PAGE_WIDTH);
    assert_eq!(geom.height, PAGE_HEIGHT);
    assert_eq!(geom.half_width(), 620.0);
    assert_eq!(geom.half_height(), 877.0);
}

#[test]
fn test_slot_origin_mapping_is_fixed() {
    let geom = PageGeometry::new(1240.0, 1754.0).unwrap();
    let expected = [
        (1, (0.0, 0.0)),
        (2, (620.0, 0.0)),
        (3, (0.0, 877.0)),
        (4, (620.0, 877.0)),
    ];
    for (slot, origin) in expected {
        let quadrant = Quadrant::from_slot(slot).unwrap();
        assert_eq!(geom.quadrant_origin(quadrant), origin, "slot {slot}");
        assert_eq!(quadrant.slot(), slot);
    }
}

#[test]
fn test_invalid_slots_are_rejected() {
    assert_eq!(Quadrant::from_slot(0), None);
    assert_eq!(Quadrant::from_slot(5), None);
}

#[test]
fn test_quadrants_tile_the_page_without_overlap() {
    let geom = PageGeometry::new(1000.0, 2000.0).unwrap();
    let (hw, hh) = (geom.half_width(), geom.half_height());

    let origins: Vec<(f32, f32)> = Quadrant::ALL
        .iter()
        .map(|&q| geom.quadrant_origin(q))
        .collect();

    // Pairwise disjoint: half-size rectangles overlap only if both
    // origin coordinates coincide.
    for (i, a) in origins.iter().enumerate() {
        for b in origins.iter().skip(i + 1) {
            assert!(a != b, "quadrants {a:?} and {b:?} overlap");
        }
    }

    // Union covers the page: total area matches and every origin is one
    // of the four grid corners.
    let area: f32 = origins.len() as f32 * hw * hh;
    assert_eq!(area, geom.width * geom.height);
    for (x, y) in origins {
        assert!(x == 0.0 || x == hw);
        assert!(y == 0.0 || y == hh);
    }
}

#[test]
fn test_non_positive_dimensions_are_a_config_error() {
    assert!(PageGeometry::new(0.0, 100.0).is_err());
    assert!(PageGeometry::new(100.0, -1.0).is_err());
}
