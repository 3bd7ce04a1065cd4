use super::*;
use image::Rgb;

#[test]
fn same_size_is_exact_copy() {
    let f = Frame::from_fn(7, 5, |x, y| Rgb([x as u8 * 30, y as u8 * 40, 9]));
    assert_eq!(resize_bilinear(&f, 7, 5), f);
}

#[test]
fn solid_colour_stays_solid() {
    let f = Frame::from_pixel(9, 4, Rgb([12, 200, 77]));
    let up = resize_bilinear(&f, 23, 11);
    assert_eq!(up.dimensions(), (23, 11));
    assert!(up.pixels().all(|p| *p == Rgb([12, 200, 77])));
    let down = resize_bilinear(&f, 3, 2);
    assert!(down.pixels().all(|p| *p == Rgb([12, 200, 77])));
}

#[test]
fn upscale_by_two_interpolates_between_neighbours() {
    let f = Frame::from_fn(2, 1, |x, _| if x == 0 { Rgb([0, 0, 0]) } else { Rgb([200, 200, 200]) });
    let up = resize_bilinear(&f, 4, 1);
    // Centres map to -0.25, 0.25, 0.75, 1.25 -> clamped 0, 0.25, 0.75, 1.
    let row: Vec<u8> = up.pixels().map(|p| p.0[0]).collect();
    assert_eq!(row, vec![0, 50, 150, 200]);
}

#[test]
fn downscale_by_two_averages_pairs() {
    let f = Frame::from_fn(4, 1, |x, _| Rgb([(x * 40) as u8, 0, 0]));
    let down = resize_bilinear(&f, 2, 1);
    // Centres map to 0.5 and 2.5.
    assert_eq!(down.get_pixel(0, 0).0[0], 20);
    assert_eq!(down.get_pixel(1, 0).0[0], 100);
}

#[test]
fn taps_stay_in_bounds() {
    for (src, dst) in [(1u32, 5u32), (5, 1), (1280, 853), (853, 1280), (3, 3)] {
        for t in taps(src, u64::from(dst), 0, dst) {
            assert!(t.i0 < src as usize);
            assert!(t.i1 < src as usize);
            assert!((0.0..=1.0).contains(&t.w1));
        }
    }
}

#[test]
fn region_matches_full_resize_then_crop() {
    let f = Frame::from_fn(13, 7, |x, y| Rgb([x as u8 * 19, y as u8 * 31, (x * y) as u8]));
    let full = resize_bilinear(&f, 29, 17);
    let want = image::imageops::crop_imm(&full, 6, 4, 13, 7).to_image();
    assert_eq!(resize_bilinear_region(&f, (29, 17), (6, 4), (13, 7)), want);
}

#[test]
fn region_of_a_huge_virtual_resize_only_allocates_the_window() {
    let f = Frame::from_fn(4, 2, |x, _| Rgb([x as u8 * 60, 0, 0]));
    // Centre of a 4e9 x 2e9 virtual image: sits on the boundary between source columns 1 and 2.
    let out = resize_bilinear_region(
        &f,
        (4_000_000_000, 2_000_000_000),
        (1_999_999_998, 999_999_999),
        (4, 2),
    );
    assert_eq!(out.dimensions(), (4, 2));
    for p in out.pixels() {
        assert!((60..=120).contains(&p.0[0]));
    }
}
