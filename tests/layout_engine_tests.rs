use chart_layout::api::{ComponentDescriptor, LAYOUT_DESCRIPTOR_JSON_SCHEMA_V1, LayoutDescriptor};
use chart_layout::core::{AlignmentKind, BoundBox, SpatialConfig};
use chart_layout::layout::{LayoutConfig, find_node};
use chart_layout::render::Coordinate;
use chart_layout::{LayoutEngine, LayoutError};

fn chart_descriptor() -> LayoutDescriptor {
    LayoutDescriptor {
        config: LayoutConfig::new("#chart", "layout-container"),
        coordinates: vec![
            Coordinate::new("plot", BoundBox::new(0.0, 40.0, 360.0, 260.0)),
            Coordinate::new("y-axis", BoundBox::new(10.0, 0.0, 40.0, 240.0)),
            Coordinate::new("x-axis", BoundBox::new(260.0, 30.0, 380.0, 30.0)),
            Coordinate::new("legend", BoundBox::new(300.0, 0.0, 200.0, 20.0)),
        ],
        root: ComponentDescriptor::passive("root")
            .with_child(
                ComponentDescriptor::passive("canvas-row")
                    .with_child(
                        ComponentDescriptor::drawable("plot", "plot").with_class_name("plot"),
                    )
                    .with_child(
                        ComponentDescriptor::drawable("y-axis", "y-axis")
                            .with_class_name("axis y")
                            .aligned_with("plot", AlignmentKind::Top),
                    ),
            )
            .with_child(
                ComponentDescriptor::drawable("x-axis", "x-axis")
                    .with_class_name("axis x")
                    .aligned_with("plot", AlignmentKind::Left),
            )
            .with_child(
                ComponentDescriptor::drawable("legend", "legend")
                    .aligned_with("plot", AlignmentKind::HCenter),
            ),
    }
}

#[test]
fn render_mounts_draws_and_aligns() {
    let mut engine = LayoutEngine::from_descriptor(&chart_descriptor()).expect("engine");
    assert_eq!(engine.context().component_map().len(), 4);

    let summary = engine.render().expect("render");
    assert_eq!(summary.draw.visited, 5);
    assert_eq!(summary.draw.drawn, 4);
    assert_eq!(summary.alignment.visited, 5);
    assert_eq!(summary.alignment.aligned, 3);

    let y_axis = engine.component("y-axis").expect("y-axis");
    assert_eq!(
        y_axis.borrow().spatial_config(),
        Some(SpatialConfig {
            x: 0.0,
            y: 0.0,
            height: 230.0,
            width: 40.0,
        })
    );

    let legend = find_node(engine.context(), "legend").expect("legend");
    assert_eq!(legend.node().bound_box(), BoundBox::new(300.0, 40.0, 360.0, 20.0));

    let html = engine.context().html_renderer().expect("html backend");
    let x_axis = html.element("x-axis").expect("x-axis element");
    assert_eq!(x_axis.classes.as_slice(), &["axis", "x"]);
    assert_eq!(x_axis.bound_box, BoundBox::new(260.0, 40.0, 370.0, 30.0));
}

#[test]
fn aligning_before_mount_fails_with_reference_error() {
    let mut engine = LayoutEngine::from_descriptor(&chart_descriptor()).expect("engine");
    let err = engine.align().expect_err("unmounted align must fail");
    assert!(matches!(err, LayoutError::ReferenceResolution { .. }));
}

#[test]
fn removing_rendered_element_keeps_component_registered() {
    let mut engine = LayoutEngine::from_descriptor(&chart_descriptor()).expect("engine");
    engine.render().expect("render");

    assert!(engine.remove_element("legend").expect("remove"));
    assert!(!engine.remove_element("legend").expect("missing id is a no-op"));
    assert!(engine.component("legend").is_ok());
    assert_eq!(engine.tree().descendant_count(), 5);
}

#[test]
fn duplicate_component_names_are_rejected_at_build() {
    let mut descriptor = chart_descriptor();
    descriptor.root = descriptor
        .root
        .with_child(ComponentDescriptor::drawable("legend-copy", "legend"));
    let err = LayoutEngine::from_descriptor(&descriptor).expect_err("duplicate must fail");
    assert!(matches!(err, LayoutError::DuplicateComponent { name } if name == "legend"));
}

#[test]
fn drawable_without_name_is_invalid() {
    let mut descriptor = chart_descriptor();
    descriptor.root = ComponentDescriptor::passive("root")
        .with_child(ComponentDescriptor::drawable("anonymous", ""));
    let err = LayoutEngine::from_descriptor(&descriptor).expect_err("must fail");
    assert!(err.to_string().contains("must declare a name"));
}

#[test]
fn descriptor_json_contract_round_trips_and_accepts_bare_payloads() {
    let descriptor = chart_descriptor();
    let json = descriptor.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains("\"schema_version\": 1"));
    assert!(json.contains("\"h-center\""));
    assert_eq!(
        LayoutDescriptor::from_json_compat_str(&json).expect("parse contract"),
        descriptor
    );

    let bare = serde_json::to_string(&descriptor).expect("serialize bare");
    assert_eq!(
        LayoutDescriptor::from_json_compat_str(&bare).expect("parse bare"),
        descriptor
    );
}

#[test]
fn descriptor_json_rejects_unknown_schema_version() {
    let json = format!(
        r#"{{ "schema_version": {}, "layout": {{ "root": {{ "id": "root" }} }} }}"#,
        LAYOUT_DESCRIPTOR_JSON_SCHEMA_V1 + 1
    );
    let err = LayoutDescriptor::from_json_compat_str(&json).expect_err("must fail");
    assert!(err.to_string().contains("unsupported layout schema version"));
}

#[test]
fn minimal_json_descriptor_uses_config_defaults() {
    let json = r#"{
        "root": {
            "id": "root",
            "children": [
                { "id": "plot", "drawable": { "name": "plot" } },
                {
                    "id": "title",
                    "drawable": { "name": "title", "align_with": "plot", "alignment": "middle" }
                }
            ]
        }
    }"#;
    let descriptor = LayoutDescriptor::from_json_compat_str(json).expect("parse");
    assert_eq!(descriptor.config, LayoutConfig::default());

    let mut engine = LayoutEngine::from_descriptor(&descriptor).expect("engine");
    engine.context_mut().set_data(vec![
        Coordinate::new("plot", BoundBox::new(0.0, 0.0, 10.0, 10.0)),
        Coordinate::new("title", BoundBox::new(0.0, 0.0, 10.0, 10.0)),
    ]);
    let summary = engine.render().expect("render");
    assert_eq!(summary.alignment.unrecognized, 1);
    assert_eq!(summary.alignment.aligned, 0);
}

#[test]
fn children_can_align_against_a_drawable_root() {
    let descriptor = LayoutDescriptor {
        config: LayoutConfig::new("#chart", "layout"),
        coordinates: vec![
            Coordinate::new("frame", BoundBox::new(0.0, 20.0, 200.0, 100.0)),
            Coordinate::new("title", BoundBox::new(5.0, 40.0, 100.0, 10.0)),
        ],
        root: ComponentDescriptor::drawable("frame", "frame").with_child(
            ComponentDescriptor::drawable("title", "title")
                .aligned_with("frame", AlignmentKind::Left),
        ),
    };
    let mut engine = LayoutEngine::from_descriptor(&descriptor).expect("engine");
    assert_eq!(
        engine.context().component_map().names().collect::<Vec<_>>(),
        vec!["frame", "title"]
    );
    assert!(engine.component("frame").is_ok());

    let summary = engine.render().expect("render");
    assert_eq!(summary.draw.drawn, 1);
    assert_eq!(summary.alignment.aligned, 1);
    let title = engine.component("title").expect("title");
    assert_eq!(
        title.borrow().spatial_config(),
        Some(SpatialConfig {
            x: 20.0,
            y: 5.0,
            height: 10.0,
            width: 80.0,
        })
    );
}

#[test]
fn duplicate_node_ids_are_rejected_at_build() {
    let mut descriptor = chart_descriptor();
    descriptor.root = descriptor
        .root
        .with_child(ComponentDescriptor::drawable("legend", "legend-shadow"));
    let err = LayoutEngine::from_descriptor(&descriptor).expect_err("duplicate id must fail");
    assert!(matches!(&err, LayoutError::InvalidData(_)));
    assert!(err.to_string().contains("`legend` is declared more than once"));
}
