use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::render_error::RenderError;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::frame_sink::FrameSink;
use crate::core::actions::cancellation::{CancelToken, GenerationToken};
use crate::core::actions::render_frame::{RenderFrameError, render_frame};
use crate::core::fern::generator::FernGenerator;
use crate::core::frame::uniforms::FrameUniforms;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

type PendingFrame = (u64, Arc<FrameUniforms>);

struct SharedState {
    generation: Arc<AtomicU64>,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<PendingFrame>>,
    wake: Condvar,
    shutdown: AtomicBool,
    sink: Arc<dyn FrameSink>,
}

/// Renders submitted frame snapshots on a background thread, latest wins.
///
/// A newer submission cancels the frame in flight and replaces any frame
/// still waiting. Superseded frames are never delivered to the sink.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(sink: Arc<dyn FrameSink>, fern: FernGenerator) -> Self {
        Self::with_rng(sink, fern, StdRng::from_entropy())
    }

    /// Fern frames drawn from a seeded random source.
    pub fn with_seed(sink: Arc<dyn FrameSink>, fern: FernGenerator, seed: u64) -> Self {
        Self::with_rng(sink, fern, StdRng::seed_from_u64(seed))
    }

    fn with_rng(sink: Arc<dyn FrameSink>, fern: FernGenerator, rng: StdRng) -> Self {
        let shared = Arc::new(SharedState {
            generation: Arc::new(AtomicU64::new(0)),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            sink,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared, &fern, rng);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Queues `uniforms` and returns its generation number.
    pub fn submit_frame(&self, uniforms: Arc<FrameUniforms>) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some((generation, uniforms));
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        {
            // Set under the request lock so the worker cannot miss the wakeup
            // between checking the flag and waiting.
            let _guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            self.shared.shutdown.store(true, Ordering::Release);
        }
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>, fern: &FernGenerator, mut rng: StdRng) {
        loop {
            let (job_generation, uniforms) = {
                let mut guard = shared
                    .latest_request
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(request) = guard.take() {
                        break request;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let superseded = GenerationToken::new(Arc::clone(&shared.generation), job_generation);
            let cancel_token =
                || shared.shutdown.load(Ordering::Relaxed) || superseded.is_cancelled();

            let start = Instant::now();
            let result = render_frame(&uniforms, fern, &mut rng, &cancel_token);
            let render_duration = start.elapsed();

            if cancel_token.is_cancelled() {
                debug!("dropping superseded frame {}", job_generation);
                continue;
            }

            let event = match result {
                Ok(pixel_buffer) => {
                    info!(
                        "frame {} rendered in {:?}",
                        job_generation, render_duration
                    );

                    RenderEvent::Frame(FrameData {
                        generation: job_generation,
                        pixel_buffer,
                        render_duration,
                    })
                }
                Err(RenderFrameError::Cancelled(_)) => continue,
                Err(err) => RenderEvent::Error(RenderError {
                    generation: job_generation,
                    message: err.to_string(),
                }),
            };

            shared.sink.submit(event);

            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
        }
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
