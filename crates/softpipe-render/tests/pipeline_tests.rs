// Integration tests for the per-frame pipeline

use approx::assert_abs_diff_eq;
use softpipe_math::{DMat4, DVec2, Euler, Point3, Transform, Vector3};
use softpipe_render::{
    BasicVertexShader, Camera, Color, DrawCommand, Geometry, Material, Mesh, OrthographicCamera,
    PerspectiveCamera, RecordingSurface, Renderer, Scene, SvgSurface, Uniforms, VertexAttributes,
    VertexContext, VertexShader,
};
use std::f64::consts::PI;
use std::sync::{Arc, Mutex};

const EPSILON: f64 = 1e-9;

fn mesh(geometry: Geometry, material: Material) -> Mesh {
    Mesh::new(Arc::new(geometry), Arc::new(material))
}

fn painted_points(surface: &RecordingSurface) -> Vec<DVec2> {
    surface
        .painted_paths()
        .into_iter()
        .flat_map(|(points, _)| points)
        .collect()
}

#[test]
fn projection_update_is_idempotent() {
    let mut perspective = PerspectiveCamera::new(1.2, 4.0 / 3.0, 0.5, 50.0);
    perspective.update_projection_matrix();
    let first = perspective.projection_matrix();
    perspective.update_projection_matrix();
    assert_eq!(first, perspective.projection_matrix());

    let mut ortho = OrthographicCamera::from_size(10.0, 5.0, 0.1, 10.0);
    ortho.update_projection_matrix();
    let first = ortho.projection_matrix();
    ortho.update_projection_matrix();
    assert_eq!(first, ortho.projection_matrix());
}

#[test]
fn identity_transform_gives_identity_world_matrix() {
    assert_eq!(Transform::identity().matrix(), DMat4::IDENTITY);
}

#[test]
fn object_at_camera_eye_has_identity_model_view() {
    let captured = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&captured);
    let material = Material::basic(Color::WHITE).with_vertex_shader(move |ctx: &VertexContext| {
        *sink.lock().unwrap() = Some(ctx.uniforms.model_view);
        BasicVertexShader.shade(ctx)
    });

    let mut camera = PerspectiveCamera::default().at(Point3::new(1.0, -2.0, 5.0));
    let mut scene = Scene::new();
    let eye = Transform::from_position(Point3::new(1.0, -2.0, 5.0));
    scene.add(mesh(Geometry::plane(1.0, 1.0), material).with_transform(eye));

    let mut renderer = Renderer::new(RecordingSurface::new(100, 100));
    renderer.render(&scene, &mut camera);

    let model_view = captured.lock().unwrap().expect("vertex shader ran");
    assert!(model_view.abs_diff_eq(DMat4::IDENTITY, EPSILON));
}

#[test]
fn orthographic_quad_keeps_vertex_ordering() {
    let geometry = Geometry::plane(200.0, 100.0);
    assert_eq!(geometry.indices, vec![0, 1, 3, 1, 2, 3]);

    let camera = OrthographicCamera::from_size(400.0, 400.0, -10.0, 10.0);
    let uniforms = Uniforms {
        model_view: DMat4::IDENTITY,
        projection: camera.projection_matrix(),
        color: Color::WHITE,
    };
    let projected: Vec<Point3> = geometry
        .vertices
        .iter()
        .map(|v| {
            BasicVertexShader.shade(&VertexContext {
                attributes: VertexAttributes { position: v.position },
                uniforms,
            })
        })
        .collect();

    for i in 0..4 {
        for j in (i + 1)..4 {
            let gap = (projected[i] - projected[j]).length();
            assert!(gap > EPSILON, "points {i} and {j} coincide");
        }
    }
    // 0 top-left, 1 top-right, 2 bottom-right, 3 bottom-left
    let [tl, tr, br, bl] = [projected[0], projected[1], projected[2], projected[3]];
    assert!(tl.x < tr.x && bl.x < br.x);
    assert!(tl.y > bl.y && tr.y > br.y);
    assert_abs_diff_eq!(tr.x, 0.5, epsilon = EPSILON);
    assert_abs_diff_eq!(tr.y, 0.25, epsilon = EPSILON);
}

#[test]
fn orthographic_quad_lands_on_expected_pixels() {
    let mut camera = OrthographicCamera::from_size(400.0, 400.0, -10.0, 10.0);
    let mut scene = Scene::new();
    scene.add(mesh(Geometry::plane(200.0, 100.0), Material::basic(Color::RED)));

    let mut renderer = Renderer::new(RecordingSurface::new(400, 400));
    renderer.resize();
    renderer.render(&scene, &mut camera);

    let paths = renderer.surface().painted_paths();
    assert_eq!(paths.len(), 2);
    // face [0, 1, 3]: top-left, top-right, bottom-left in surface pixels (y down)
    let first = &paths[0].0;
    assert!((first[0] - DVec2::new(100.0, 150.0)).length() < EPSILON);
    assert!((first[1] - DVec2::new(300.0, 150.0)).length() < EPSILON);
    assert!((first[2] - DVec2::new(100.0, 250.0)).length() < EPSILON);
}

#[test]
fn wireframe_and_solid_are_mutually_exclusive() {
    let geometry = Geometry::cuboid(1.0, 1.0, 1.0);
    let faces = geometry.face_count();

    for wireframe in [true, false] {
        let material = if wireframe {
            Material::wireframe(Color::GREEN)
        } else {
            Material::basic(Color::GREEN)
        };
        let mut scene = Scene::new();
        scene.add(mesh(geometry.clone(), material));

        let mut renderer = Renderer::new(RecordingSurface::new(200, 200));
        renderer.render(&scene, &mut PerspectiveCamera::default());

        let paths = renderer.surface().painted_paths();
        assert_eq!(paths.len(), faces);
        for (_, paint) in &paths {
            match paint {
                DrawCommand::Stroke { color, line_width } => {
                    assert!(wireframe);
                    assert_eq!(*color, Color::GREEN);
                    assert!(*line_width >= 1.0);
                }
                DrawCommand::Fill(color) => {
                    assert!(!wireframe);
                    assert_eq!(*color, Color::GREEN);
                }
                other => panic!("unexpected paint command {other:?}"),
            }
        }
    }
}

#[test]
fn full_turn_about_y_reproduces_projection() {
    let render_at = |angle: f64| {
        let mut scene = Scene::new();
        scene.add(
            mesh(Geometry::plane(2.0, 1.0), Material::basic(Color::WHITE))
                .with_transform(Transform::identity().with_rotation(Euler::new(0.2, angle, 0.0))),
        );
        let mut renderer = Renderer::new(RecordingSurface::new(320, 240));
        renderer.render(&scene, &mut PerspectiveCamera::default());
        painted_points(renderer.surface())
    };

    let before = render_at(0.7);
    let after = render_at(0.7 + 2.0 * PI);
    assert_eq!(before.len(), after.len());
    for (a, b) in before.iter().zip(&after) {
        assert!((*a - *b).length() < 1e-6, "{a} vs {b}");
    }
}

#[test]
fn empty_scene_only_clears() {
    let mut scene = Scene::new();
    let id = scene.add(mesh(Geometry::plane(1.0, 1.0), Material::basic(Color::RED)));
    scene.remove(id);

    let mut renderer = Renderer::new(RecordingSurface::new(64, 64));
    renderer.set_clear_color(Color::rgb(10, 20, 30));
    renderer.render(&scene, &mut PerspectiveCamera::default());

    assert_eq!(renderer.surface().commands(), &[DrawCommand::Clear(Color::rgb(10, 20, 30))]);
    assert_eq!(renderer.last_frame().faces_drawn, 0);
}

#[test]
fn later_objects_draw_over_earlier_ones() {
    let mut scene = Scene::new();
    // nearer object first; no depth test means it is still painted first
    scene.add(
        mesh(Geometry::plane(1.0, 1.0), Material::basic(Color::RED))
            .with_transform(Transform::from_position(Point3::new(0.0, 0.0, 2.0))),
    );
    scene.add(mesh(Geometry::plane(1.0, 1.0), Material::basic(Color::BLUE)));

    let mut renderer = Renderer::new(RecordingSurface::new(100, 100));
    renderer.render(&scene, &mut PerspectiveCamera::default());

    let colors: Vec<_> = renderer
        .surface()
        .painted_paths()
        .into_iter()
        .map(|(_, paint)| paint)
        .collect();
    assert_eq!(
        colors,
        vec![
            DrawCommand::Fill(Color::RED),
            DrawCommand::Fill(Color::RED),
            DrawCommand::Fill(Color::BLUE),
            DrawCommand::Fill(Color::BLUE),
        ]
    );
}

#[test]
fn zero_scale_collapses_without_panicking() {
    let mut scene = Scene::new();
    scene.add(
        mesh(Geometry::cuboid(1.0, 1.0, 1.0), Material::basic(Color::WHITE))
            .with_transform(Transform::identity().with_scale(Vector3::new(0.0, 1.0, 1.0))),
    );
    scene.add(
        mesh(Geometry::cuboid(1.0, 1.0, 1.0), Material::wireframe(Color::WHITE))
            .with_transform(Transform::identity().with_scale(Vector3::ZERO)),
    );

    let mut renderer = Renderer::new(RecordingSurface::new(100, 100));
    renderer.render(&scene, &mut PerspectiveCamera::default());

    let stats = renderer.last_frame();
    assert_eq!(stats.faces_drawn + stats.faces_skipped, 24);
    assert!(renderer.surface().paths_balanced());
    // fully collapsed cuboid projects every corner onto the view center
    let collapsed = &renderer.surface().painted_paths()[12..];
    for (points, _) in collapsed {
        for p in points {
            assert!((*p - DVec2::new(50.0, 50.0)).length() < EPSILON);
        }
    }
}

#[test]
fn frames_do_not_leak_state() {
    let mut scene = Scene::new();
    let id = scene.add(mesh(Geometry::plane(1.0, 1.0), Material::basic(Color::WHITE)));
    let mut camera = PerspectiveCamera::default();
    let mut renderer = Renderer::new(RecordingSurface::new(100, 100));

    renderer.render(&scene, &mut camera);
    let first = painted_points(renderer.surface());

    scene.get_mut(id).unwrap().transform.position.x = 0.5;
    renderer.surface_mut().take_commands();
    renderer.render(&scene, &mut camera);
    let moved = painted_points(renderer.surface());
    assert_ne!(first, moved);

    scene.get_mut(id).unwrap().transform.position.x = 0.0;
    renderer.surface_mut().take_commands();
    renderer.render(&scene, &mut camera);
    assert_eq!(first, painted_points(renderer.surface()));
}

#[test]
fn renders_through_borrowed_surface() {
    let mut surface = SvgSurface::new(120, 80);
    let mut scene = Scene::new();
    scene.add(mesh(Geometry::plane(1.0, 1.0), Material::wireframe(Color::WHITE)));
    {
        let mut renderer = Renderer::new(&mut surface);
        renderer.render(&scene, &mut PerspectiveCamera::default());
    }
    assert_eq!(surface.element_count(), 2);
    assert!(surface.to_svg_string().contains("stroke=\"#ffffff\""));
}
