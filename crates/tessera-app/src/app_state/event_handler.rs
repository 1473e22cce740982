//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::core::TesseraApp;

impl ApplicationHandler for TesseraApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) || !self.spawn_panes() {
            self.shutdown();
            event_loop.exit();
            return;
        }

        if let (Some(window), Some(layout)) = (&self.window, self.layout.as_mut()) {
            let size = window.inner_size();
            layout.on_ready_to_show(size.width, size.height);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(layout) = self.layout.as_mut() {
                    layout.on_resize(size.width, size.height);
                }
            }

            WindowEvent::Destroyed => {
                self.should_exit = true;
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}
