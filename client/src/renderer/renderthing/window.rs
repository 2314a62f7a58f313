use std::{sync::Arc, time::Duration};

use anyhow::Context;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture, wgpu::TextureFormat};
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window, WindowAttributes},
};

use super::{fps::FpsCounter, frame::RenderFrame, sleeper::Sleeper};

const FPS_REPORT_INTERVAL: Duration = Duration::from_secs(1);

pub(super) struct RendererWindow {
    config: RendererWindowConfig,
    resumed_window: Option<ResumedWindow>,
    sleeper: Sleeper,
    fps_counter: FpsCounter,
    failure: Option<anyhow::Error>,
}

impl RendererWindow {
    pub fn new(config: RendererWindowConfig) -> Self {
        let sleeper = {
            let target_frame_time = 1_000_000u64
                .checked_div(config.target_fps)
                .map_or(Duration::ZERO, Duration::from_micros);
            Sleeper::new(target_frame_time)
        };

        Self {
            config,
            resumed_window: None,
            sleeper,
            fps_counter: FpsCounter::new(FPS_REPORT_INTERVAL),
            failure: None,
        }
    }

    /// The error that made the window close itself, if any.
    pub fn take_failure(&mut self) -> Option<anyhow::Error> {
        self.failure.take()
    }

    fn open(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<ResumedWindow> {
        let window = Arc::new({
            let window_size = LogicalSize::new(self.config.width, self.config.height);

            event_loop
                .create_window(
                    WindowAttributes::default()
                        .with_title(self.config.title.clone())
                        .with_inner_size(window_size),
                )
                .context("Creating window")?
        });

        // The buffer keeps the configured canvas size; pixels scales it onto the surface.
        let pixels = {
            let window_size = window.inner_size();

            let surface_texture =
                SurfaceTexture::new(window_size.width, window_size.height, window.clone());

            PixelsBuilder::new(self.config.width, self.config.height, surface_texture)
                .texture_format(TextureFormat::Rgba8UnormSrgb)
                .build()
                .context("Creating pixels buffer")?
        };

        window.request_redraw();

        Ok(ResumedWindow { window, pixels })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{error:#}");
        self.failure = Some(error);
        event_loop.exit();
    }
}

pub struct RendererWindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Zero disables frame pacing.
    pub target_fps: u64,
    pub draw_callback: Box<dyn FnMut(RenderFrame)>,
    pub event_callback: Option<Box<dyn FnMut(&WindowEvent)>>,
}

struct ResumedWindow {
    window: Arc<Window>,
    pixels: Pixels<'static>,
}

impl ApplicationHandler for RendererWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.resumed_window.is_some() {
            return;
        }

        match self.open(event_loop) {
            Ok(resumed_window) => self.resumed_window = Some(resumed_window),
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(ResumedWindow { window, pixels }) = self.resumed_window.as_mut() else {
            return;
        };

        match event {
            WindowEvent::RedrawRequested => {
                let next_frame = RenderFrame {
                    width: self.config.width,
                    height: self.config.height,
                    buffer: pixels.frame_mut(),
                };

                (self.config.draw_callback)(next_frame);

                if let Err(e) = pixels.render().context("Rendering with pixels") {
                    self.fail(event_loop, e);
                    return;
                }

                if let Some(fps) = self.fps_counter.frame() {
                    log::info!("fps: {fps:.1}");
                }

                // FIXME: It isn't ideal that we're hanging the entire event loop just for the throttled redraw loop.
                //        This can make things such as resizing less responsive, since we're waiting here instead of handling the resize.
                self.sleeper.sleep();
                window.request_redraw();
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                // Minimized windows report a zero size, which no surface can take.
                if width > 0 && height > 0 {
                    if let Err(e) = pixels
                        .resize_surface(width, height)
                        .context("Resizing pixels surface")
                    {
                        self.fail(event_loop, e);
                        return;
                    }
                }
                window.request_redraw();
            }
            WindowEvent::CloseRequested => event_loop.exit(),
            _ => {}
        }

        if let Some(event_callback) = &mut self.config.event_callback {
            event_callback(&event);
        }
    }
}
