//! Invariants that hold across container sizes, not just at hand-picked points.

use bidir_layout::{
    Axis, AxisChild, AxisPass, BidirHorizontalLayoutGroup, ElementSizes, HostChild,
    LayoutConfig, PerAxis, StaticHost, calc_along_axis,
};

const WIDTHS: [f32; 8] = [0.0, 5.0, 40.0, 95.0, 120.0, 180.0, 260.0, 1000.0];

fn mixed_children() -> Vec<ElementSizes> {
    vec![
        ElementSizes::new(10.0, 40.0, 0.0),
        ElementSizes::new(0.0, 25.0, 2.0),
        ElementSizes::new(20.0, 20.0, 1.0),
    ]
}

#[test]
/// # Panics
/// Panics if the min/preferred interpolation factor leaves `[0, 1]` for any width.
fn min_max_lerp_stays_in_unit_range() {
    let config = LayoutConfig {
        spacing: 4.0,
        ..LayoutConfig::default()
    };
    let flags = config.axis_flags(Axis::Horizontal);
    let children: Vec<AxisChild> = mixed_children()
        .into_iter()
        .map(|sizes| AxisChild::new(sizes, 0.0, 1.0, flags))
        .collect();
    let totals = calc_along_axis(&children, false, 0.0, config.spacing, false);
    for width in WIDTHS {
        let pass = AxisPass {
            config: &config,
            axis: Axis::Horizontal,
            container_size: width,
            totals,
            is_vertical: false,
            reverse: false,
        };
        let factor = pass.min_max_lerp();
        assert!((0.0..=1.0).contains(&factor), "width {width} gave {factor}");
    }
}

#[test]
/// # Panics
/// Panics if reversed placement is not the mirror of forward placement at any width.
fn reversal_is_a_mirror_at_every_width() {
    for width in WIDTHS {
        let build = || {
            mixed_children()
                .into_iter()
                .zip(1..)
                .fold(StaticHost::new(width, 30.0), |host, (sizes, id)| {
                    host.with_child(HostChild::new(id).with_width(sizes))
                })
        };
        let config = LayoutConfig {
            spacing: 6.0,
            child_force_expand: PerAxis::splat(false),
            ..LayoutConfig::default()
        };
        let mut forward = build();
        BidirHorizontalLayoutGroup::new(config).layout(&mut forward);
        let mut reversed = build();
        BidirHorizontalLayoutGroup::new(LayoutConfig {
            reverse: true,
            ..config
        })
        .layout(&mut reversed);

        for (lhs, rhs) in forward.children.iter().zip(reversed.children.iter()) {
            let left = forward.visual_rect(lhs.id).unwrap_or_default();
            let right = reversed.visual_rect(rhs.id).unwrap_or_default();
            assert!(
                (right.x - (width - left.right())).abs() < 0.001,
                "width {width}: forward {left:?} reversed {right:?}"
            );
            assert!((right.width - left.width).abs() < 0.001);
        }
    }
}

#[test]
/// # Panics
/// Panics if controlled widths ever drop below a child's min or miss the flexible share.
fn controlled_widths_respect_min_and_flex_share() {
    for width in WIDTHS {
        let mut host = mixed_children()
            .into_iter()
            .zip(1..)
            .fold(StaticHost::new(width, 30.0), |host, (sizes, id)| {
                host.with_child(HostChild::new(id).with_width(sizes))
            });
        let mut group = BidirHorizontalLayoutGroup::new(LayoutConfig {
            child_force_expand: PerAxis::splat(false),
            ..LayoutConfig::default()
        });
        group.layout(&mut host);
        let preferred_total = group
            .layout_input(Axis::Horizontal)
            .preferred;
        let surplus = width - preferred_total;
        for (child, sizes) in host.children.iter().zip(mixed_children()) {
            let placed = child.geometry.size_delta.x;
            assert!(placed + 0.001 >= sizes.min, "width {width}: {placed} < {}", sizes.min);
            if surplus > 0.0 {
                let expected = sizes.flexible.mul_add(surplus / 3.0, sizes.preferred);
                assert!((placed - expected).abs() < 0.001, "width {width}: {placed} != {expected}");
            }
        }
    }
}
