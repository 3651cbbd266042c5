use circlefill_designer::viewport::sanitize_px_per_mm;
use circlefill_designer::{compute_transform, mm_to_device, FitMode, Rectangle, Viewport};

fn default_rect() -> Rectangle {
    Rectangle::new(10.0, 10.0, 800.0, 2000.0).unwrap()
}

#[test]
fn test_auto_fit_preserves_aspect() {
    let t = compute_transform(&default_rect(), 848.0, 648.0, 24.0, FitMode::Auto, 3.0, 1.0);
    // min((848-48)/800, (648-48)/2000) = min(1.0, 0.3)
    assert!((t.px_per_mm - 0.3).abs() < 1e-12);
    assert!((t.x_offset_px - (24.0 - 10.0 * 0.3)).abs() < 1e-9);
    assert!((t.y_offset_px - (24.0 - 10.0 * 0.3)).abs() < 1e-9);
}

#[test]
fn test_auto_fit_maps_min_corner_to_margin() {
    let rect = Rectangle::new(-40.0, 75.0, 300.0, 120.0).unwrap();
    let t = compute_transform(&rect, 1024.0, 768.0, 24.0, FitMode::Auto, 3.0, 1.0);
    let (px, py) = t.mm_to_device(-40.0, 75.0);
    assert!((px - 24.0).abs() < 1e-9);
    assert!((py - 24.0).abs() < 1e-9);
    // Rectangle fits inside the usable area
    let (max_px, max_py) = t.mm_to_device(260.0, 195.0);
    assert!(max_px <= 1024.0 - 24.0 + 1e-9);
    assert!(max_py <= 768.0 - 24.0 + 1e-9);
}

#[test]
fn test_auto_fit_applies_zoom() {
    let base = compute_transform(&default_rect(), 848.0, 648.0, 24.0, FitMode::Auto, 3.0, 1.0);
    let zoomed = compute_transform(&default_rect(), 848.0, 648.0, 24.0, FitMode::Auto, 3.0, 2.0);
    assert!((zoomed.px_per_mm - base.px_per_mm * 2.0).abs() < 1e-12);
    assert!((zoomed.x_offset_px - (24.0 - 10.0 * zoomed.px_per_mm)).abs() < 1e-9);
}

#[test]
fn test_auto_fit_tiny_surface_uses_one_pixel() {
    let t = compute_transform(&default_rect(), 10.0, 10.0, 24.0, FitMode::Auto, 3.0, 1.0);
    assert!((t.px_per_mm - 1.0 / 2000.0).abs() < 1e-15);
}

#[test]
fn test_auto_fit_degenerate_scale_falls_back() {
    let rect = Rectangle {
        width: f64::INFINITY,
        ..default_rect()
    };
    let t = compute_transform(&rect, 800.0, 600.0, 24.0, FitMode::Auto, 3.0, 1.5);
    assert_eq!(t.px_per_mm, 1.5);
}

#[test]
fn test_manual_mode_is_uncentered() {
    let t = compute_transform(&default_rect(), 800.0, 600.0, 24.0, FitMode::Manual, 3.0, 1.2);
    assert!((t.px_per_mm - 3.6).abs() < 1e-12);
    assert_eq!(t.x_offset_px, 0.0);
    assert_eq!(t.y_offset_px, 0.0);
}

#[test]
fn test_manual_mode_invalid_scale_becomes_one() {
    for bad in [0.0, -2.0, f64::NAN, f64::INFINITY] {
        let t = compute_transform(&default_rect(), 800.0, 600.0, 24.0, FitMode::Manual, bad, 2.0);
        assert_eq!(t.px_per_mm, 2.0);
    }
    assert_eq!(sanitize_px_per_mm(-1.0), 1.0);
    assert_eq!(sanitize_px_per_mm(2.5), 2.5);
}

#[test]
fn test_mm_to_device_formula() {
    assert_eq!(mm_to_device(10.0, 20.0, 2.0, 5.0, -3.0), (25.0, 37.0));
}

#[test]
fn test_roundtrip_conversion() {
    let rect = default_rect();
    for (mode, zoom) in [(FitMode::Auto, 1.0), (FitMode::Auto, 3.7), (FitMode::Manual, 0.4)] {
        let t = compute_transform(&rect, 1200.0, 800.0, 24.0, mode, 2.5, zoom);
        for (x, y) in [(0.0, 0.0), (123.45, 456.78), (-50.0, 1999.0)] {
            let (px, py) = t.mm_to_device(x, y);
            let back = t.device_to_mm(px, py);
            assert!((back.x - x).abs() < 1e-9, "{:?} x", mode);
            assert!((back.y - y).abs() < 1e-9, "{:?} y", mode);
        }
    }
}

#[test]
fn test_zoom_in_saturates_at_max() {
    let mut vp = Viewport::new(800.0, 600.0);
    for _ in 0..100 {
        vp.zoom_in();
        assert!(vp.zoom() <= 10.0);
    }
    assert_eq!(vp.zoom(), 10.0);
}

#[test]
fn test_zoom_out_saturates_at_min() {
    let mut vp = Viewport::new(800.0, 600.0);
    for _ in 0..100 {
        vp.zoom_out();
        assert!(vp.zoom() >= 0.05);
    }
    assert_eq!(vp.zoom(), 0.05);
}

#[test]
fn test_zoom_in_out_reset() {
    let mut vp = Viewport::default();
    vp.zoom_in();
    assert!((vp.zoom() - 1.2).abs() < 1e-12);
    vp.zoom_out();
    assert!((vp.zoom() - 1.0).abs() < 1e-12);
    vp.zoom_in();
    vp.zoom_in();
    vp.reset_zoom();
    assert_eq!(vp.zoom(), 1.0);
}

#[test]
fn test_canvas_size_floored() {
    let mut vp = Viewport::new(0.0, -10.0);
    assert_eq!(vp.canvas_width(), 1.0);
    assert_eq!(vp.canvas_height(), 1.0);
    vp.set_canvas_size(1024.0, 0.5);
    assert_eq!(vp.canvas_width(), 1024.0);
    assert_eq!(vp.canvas_height(), 1.0);
}

#[test]
fn test_manual_scale_written_back() {
    let mut vp = Viewport::default();
    vp.set_manual_px_per_mm(-4.0);
    assert_eq!(vp.manual_px_per_mm(), 1.0);
    vp.set_manual_px_per_mm(4.0);
    assert_eq!(vp.manual_px_per_mm(), 4.0);
}

#[test]
fn test_margin_validation() {
    let mut vp = Viewport::default();
    assert!(vp.set_margin_px(-1.0).is_err());
    assert_eq!(vp.margin_px(), 24.0);
    vp.set_margin_px(0.0).unwrap();
    assert_eq!(vp.margin_px(), 0.0);
}

#[test]
fn test_scale_label() {
    let mut vp = Viewport::new(848.0, 648.0);
    assert_eq!(vp.scale_label(&default_rect()), "Scale: 0.300 px/mm  (100%)");
    vp.zoom_in();
    assert_eq!(vp.scale_label(&default_rect()), "Scale: 0.360 px/mm  (120%)");
}

#[test]
fn test_reset_restores_view_but_keeps_surface() {
    let mut vp = Viewport::new(1000.0, 700.0);
    vp.set_fit_mode(FitMode::Manual);
    vp.set_manual_px_per_mm(8.0);
    vp.zoom_in();
    vp.reset();
    assert_eq!(vp.fit_mode(), FitMode::Auto);
    assert_eq!(vp.manual_px_per_mm(), 3.0);
    assert_eq!(vp.zoom(), 1.0);
    assert_eq!(vp.canvas_width(), 1000.0);
    assert_eq!(vp.canvas_height(), 700.0);
}
