use anyhow::Result;
use clap::Parser;
use egui::Context as EguiContext;
use gridscape_camera::FreeCamera;
use gridscape_common::{FillMode, RenderSettings, Rgba};
use gridscape_input::{CameraController, Command};
use gridscape_mesh::GridMesh;
use gridscape_render::{FrameRequester, RedrawDriver};
use gridscape_render_wgpu::GridRenderer;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "gridscape-desktop", about = "3D grid viewer with a free camera")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

// Grid dimensions are build-time constants; there is no runtime
// configuration surface.
const GRID_WIDTH: u32 = 10;
const GRID_LENGTH: u32 = 10;

/// A full wheel notch in host delta units (winit line deltas are 1 per
/// notch; the controller's wheel scale expects 120 per notch).
const WHEEL_NOTCH: f32 = 120.0;

/// Frame requests go to the winit window.
struct WindowRequester<'a>(&'a Window);

impl FrameRequester for WindowRequester<'_> {
    fn request_frame(&self) {
        self.0.request_redraw();
    }
}

fn command_for_key(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::KeyW => Some(Command::Advance),
        KeyCode::KeyS => Some(Command::Retreat),
        KeyCode::KeyA => Some(Command::StrafeLeft),
        KeyCode::KeyD => Some(Command::StrafeRight),
        KeyCode::KeyQ => Some(Command::TurnLeft),
        KeyCode::KeyE => Some(Command::TurnRight),
        KeyCode::ArrowUp => Some(Command::TiltUp),
        KeyCode::ArrowDown => Some(Command::TiltDown),
        _ => None,
    }
}

fn rgba_to_color32(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgb(
        (c.r * 255.0) as u8,
        (c.g * 255.0) as u8,
        (c.b * 255.0) as u8,
    )
}

fn color32_to_rgba(c: egui::Color32) -> Rgba {
    Rgba::new(
        c.r() as f32 / 255.0,
        c.g() as f32 / 255.0,
        c.b() as f32 / 255.0,
        1.0,
    )
}

/// Application state: camera, settings, controller, and the redraw driver.
struct AppState {
    camera: FreeCamera,
    settings: RenderSettings,
    controller: CameraController,
    driver: RedrawDriver,
    cursor: (f32, f32),
    color_picker_open: bool,
    picker_color: egui::Color32,
}

impl AppState {
    fn new() -> Self {
        Self {
            camera: FreeCamera::default(),
            settings: RenderSettings::default(),
            controller: CameraController::new(),
            driver: RedrawDriver::new(),
            cursor: (0.0, 0.0),
            color_picker_open: false,
            picker_color: egui::Color32::BLACK,
        }
    }

    fn apply(&mut self, cmd: Command) {
        self.controller
            .apply(cmd, &mut self.camera, &mut self.settings);
    }

    fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if !pressed {
            return;
        }
        if let Some(cmd) = command_for_key(key) {
            self.apply(cmd);
        }
    }

    fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if button != MouseButton::Middle {
            return;
        }
        let (x, y) = self.cursor;
        if pressed {
            self.apply(Command::DragBegin { x, y });
        } else {
            self.apply(Command::DragEnd);
        }
    }

    fn handle_cursor_moved(&mut self, x: f32, y: f32) {
        self.cursor = (x, y);
        if self.controller.is_dragging() {
            self.apply(Command::DragMove { x, y });
        }
    }

    fn handle_wheel(&mut self, delta: MouseScrollDelta) {
        let amount = match delta {
            MouseScrollDelta::LineDelta(_, y) => y * WHEEL_NOTCH,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
        };
        self.apply(Command::Elevate(amount));
    }

    fn open_color_picker(&mut self) {
        self.picker_color = rgba_to_color32(self.settings.background);
        self.color_picker_open = true;
        // The continuous loop stays off while the dialog is up; repaints
        // are event-driven until it closes.
        self.driver.suspend();
    }

    /// Menu bar and the modal color-picker window. Returns the commands the
    /// UI produced this frame; the caller feeds them through the
    /// controller.
    fn draw_ui(&mut self, ctx: &EguiContext) -> Vec<Command> {
        let mut commands = Vec::new();

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Properties", |ui| {
                    ui.menu_button("Fill Mode", |ui| {
                        let wireframe = self.settings.fill_mode == FillMode::Wireframe;
                        if ui.selectable_label(wireframe, "WireFrame").clicked() {
                            commands.push(Command::SetFillMode(FillMode::Wireframe));
                            ui.close_menu();
                        }
                        let point = self.settings.fill_mode == FillMode::Point;
                        if ui.selectable_label(point, "Point").clicked() {
                            commands.push(Command::SetFillMode(FillMode::Point));
                            ui.close_menu();
                        }
                    });
                    if ui.button("Background Color…").clicked() {
                        self.open_color_picker();
                        ui.close_menu();
                    }
                });
            });
        });

        if self.color_picker_open {
            egui::Window::new("Background Color")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.color_edit_button_srgba(&mut self.picker_color);
                    ui.separator();
                    ui.horizontal(|ui| {
                        if ui.button("OK").clicked() {
                            commands.push(Command::SetBackground(color32_to_rgba(
                                self.picker_color,
                            )));
                            self.color_picker_open = false;
                        }
                        if ui.button("Cancel").clicked() {
                            self.color_picker_open = false;
                        }
                    });
                });
        }

        commands
    }
}

struct GpuApp {
    state: AppState,
    window: Option<Arc<Window>>,
    surface: Option<wgpu::Surface<'static>>,
    device: Option<wgpu::Device>,
    queue: Option<wgpu::Queue>,
    config: Option<wgpu::SurfaceConfiguration>,
    renderer: Option<GridRenderer>,
    egui_ctx: EguiContext,
    egui_winit: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,
}

impl GpuApp {
    fn new() -> Self {
        Self {
            state: AppState::new(),
            window: None,
            surface: None,
            device: None,
            queue: None,
            config: None,
            renderer: None,
            egui_ctx: EguiContext::default(),
            egui_winit: None,
            egui_renderer: None,
        }
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Gridscape")
            .with_inner_size(PhysicalSize::new(1280u32, 720));
        let window = Arc::new(event_loop.create_window(attrs).expect("create window"));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .expect("create surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("find adapter");

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("gridscape_device"),
                required_features: gridscape_render_wgpu::required_features(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .expect("create device");

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        self.state.camera.aspect = size.width as f32 / size.height.max(1) as f32;

        let mesh = GridMesh::generate(GRID_WIDTH, GRID_LENGTH).expect("grid dimensions");
        tracing::info!(
            vertices = mesh.vertex_count(),
            indices = mesh.index_count(),
            "grid mesh generated"
        );
        let renderer = GridRenderer::new(&device, surface_format, &mesh, size.width, size.height);

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        self.window = Some(window);
        self.surface = Some(surface);
        self.device = Some(device);
        self.queue = Some(queue);
        self.config = Some(config);
        self.renderer = Some(renderer);
        self.egui_winit = Some(egui_winit);
        self.egui_renderer = Some(egui_renderer);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(egui_winit) = &mut self.egui_winit {
            let window = self.window.as_ref().unwrap();
            let response = egui_winit.on_window_event(window, &event);
            // While the redraw loop is suspended, the menu and dialog only
            // repaint when egui asks for it.
            if response.repaint && !self.state.driver.is_continuous() {
                window.request_redraw();
            }
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let (Some(surface), Some(device), Some(config)) =
                    (&self.surface, &self.device, &mut self.config)
                {
                    config.width = new_size.width.max(1);
                    config.height = new_size.height.max(1);
                    surface.configure(device, config);
                    self.state.camera.aspect =
                        config.width as f32 / config.height.max(1) as f32;
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(device, config.width, config.height);
                    }
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                self.state
                    .handle_key(key, key_state == ElementState::Pressed);
            }
            WindowEvent::MouseInput { button, state: btn_state, .. } => {
                self.state
                    .handle_mouse_button(button, btn_state == ElementState::Pressed);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.state
                    .handle_cursor_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.state.handle_wheel(delta);
            }
            WindowEvent::RedrawRequested => {
                let (Some(surface), Some(device), Some(queue)) =
                    (&self.surface, &self.device, &self.queue)
                else {
                    return;
                };

                let output = match surface.get_current_texture() {
                    Ok(t) => t,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        if let Some(config) = &self.config {
                            surface.configure(device, config);
                        }
                        return;
                    }
                    Err(e) => {
                        tracing::error!("surface error: {e}");
                        return;
                    }
                };

                let view = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                if let Some(renderer) = &self.renderer {
                    renderer.render(device, queue, &view, &self.state.camera, &self.state.settings);
                }

                let raw_input = self
                    .egui_winit
                    .as_mut()
                    .unwrap()
                    .take_egui_input(self.window.as_ref().unwrap());
                let mut commands = Vec::new();
                let full_output = self.egui_ctx.run(raw_input, |ctx| {
                    commands = self.state.draw_ui(ctx);
                });
                for cmd in commands {
                    self.state.apply(cmd);
                }

                self.egui_winit.as_mut().unwrap().handle_platform_output(
                    self.window.as_ref().unwrap(),
                    full_output.platform_output,
                );

                let paint_jobs = self
                    .egui_ctx
                    .tessellate(full_output.shapes, full_output.pixels_per_point);

                let screen_descriptor = egui_wgpu::ScreenDescriptor {
                    size_in_pixels: [
                        self.config.as_ref().unwrap().width,
                        self.config.as_ref().unwrap().height,
                    ],
                    pixels_per_point: full_output.pixels_per_point,
                };

                {
                    let egui_renderer = self.egui_renderer.as_mut().unwrap();
                    for (id, image_delta) in &full_output.textures_delta.set {
                        egui_renderer.update_texture(device, queue, *id, image_delta);
                    }
                    let mut encoder =
                        device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("egui_encoder"),
                        });
                    egui_renderer.update_buffers(
                        device,
                        queue,
                        &mut encoder,
                        &paint_jobs,
                        &screen_descriptor,
                    );
                    {
                        let mut pass = encoder
                            .begin_render_pass(&wgpu::RenderPassDescriptor {
                                label: Some("egui_pass"),
                                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                                    view: &view,
                                    resolve_target: None,
                                    ops: wgpu::Operations {
                                        load: wgpu::LoadOp::Load,
                                        store: wgpu::StoreOp::Store,
                                    },
                                })],
                                depth_stencil_attachment: None,
                                ..Default::default()
                            })
                            .forget_lifetime();
                        egui_renderer.render(&mut pass, &paint_jobs, &screen_descriptor);
                    }
                    queue.submit(std::iter::once(encoder.finish()));
                    for id in &full_output.textures_delta.free {
                        egui_renderer.free_texture(id);
                    }
                }

                output.present();

                if let Some(window) = &self.window {
                    let requester = WindowRequester(window);
                    if !self.state.color_picker_open && !self.state.driver.is_continuous() {
                        // Dialog closed this frame: restore the loop and
                        // force one redraw.
                        self.state.driver.resume_and_request(&requester);
                    } else {
                        self.state.driver.frame_completed(&requester);
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            if self.state.driver.is_continuous() {
                WindowRequester(window).request_frame();
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("gridscape-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new();
    event_loop.run_app(&mut app)?;

    Ok(())
}
