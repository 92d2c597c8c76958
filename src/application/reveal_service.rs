// Reveal service - Drives count-up counters on the tokio runtime
use crate::domain::reveal::{RevealCounter, RevealPhase};
use crate::infrastructure::config::RevealSettings;
use futures::stream::{Stream, StreamExt};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_stream::wrappers::WatchStream;

/// Snapshot published to observers after every state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealFrame {
    pub value: u64,
    pub phase: RevealPhase,
}

pub struct RevealHandle {
    target: u64,
    suffix: String,
    visibility_tx: mpsc::UnboundedSender<f64>,
    // Dropping the sender cancels the task as well.
    cancel_tx: Option<oneshot::Sender<()>>,
    frame_rx: watch::Receiver<RevealFrame>,
    task: JoinHandle<()>,
}

impl RevealHandle {
    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn value(&self) -> u64 {
        self.frame_rx.borrow().value
    }

    pub fn phase(&self) -> RevealPhase {
        self.frame_rx.borrow().phase
    }

    pub fn rendered(&self) -> String {
        format!("{}{}", self.value(), self.suffix)
    }

    /// Forward an intersection ratio from the viewport observer. Signals sent
    /// after the counter latched or was torn down are dropped.
    pub fn signal_visibility(&self, ratio: f64) {
        if self.visibility_tx.send(ratio).is_err() {
            tracing::trace!("Visibility signal {} ignored, observer already detached", ratio);
        }
    }

    /// True once the driving task has exited, after settling or teardown.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    pub fn subscribe(&self) -> watch::Receiver<RevealFrame> {
        self.frame_rx.clone()
    }

    /// Stream of displayed values, starting with the current one.
    pub fn changes(&self) -> impl Stream<Item = u64> + use<> {
        WatchStream::new(self.frame_rx.clone()).map(|frame| frame.value)
    }

    /// Stop the animation. The last published value stays readable.
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel_tx.take() {
            let _ = tx.send(());
        }
    }

    /// Wait until the counter reaches its target. Returns `None` if it was
    /// torn down first.
    pub async fn settled(&mut self) -> Option<u64> {
        self.frame_rx
            .wait_for(|frame| frame.phase == RevealPhase::Settled)
            .await
            .ok()
            .map(|frame| frame.value)
    }
}

pub fn spawn_reveal(counter: RevealCounter, settings: RevealSettings) -> RevealHandle {
    let (visibility_tx, visibility_rx) = mpsc::unbounded_channel();
    let (cancel_tx, cancel_rx) = oneshot::channel();
    let (frame_tx, frame_rx) = watch::channel(RevealFrame {
        value: counter.display_value(),
        phase: counter.phase(),
    });

    let target = counter.target();
    let suffix = counter.suffix().to_string();
    let task = tokio::spawn(run_reveal(counter, settings, visibility_rx, cancel_rx, frame_tx));

    RevealHandle {
        target,
        suffix,
        visibility_tx,
        cancel_tx: Some(cancel_tx),
        frame_rx,
        task,
    }
}

async fn run_reveal(
    mut counter: RevealCounter,
    settings: RevealSettings,
    mut visibility_rx: mpsc::UnboundedReceiver<f64>,
    mut cancel_rx: oneshot::Receiver<()>,
    frame_tx: watch::Sender<RevealFrame>,
) {
    // 1. Wait for the first intersection over the threshold
    loop {
        tokio::select! {
            biased;
            _ = &mut cancel_rx => {
                counter.cancel();
                tracing::debug!("Counter {} torn down before becoming visible", counter.target());
                return;
            }
            signal = visibility_rx.recv() => {
                let Some(ratio) = signal else {
                    return;
                };
                match counter.observe_intersection(ratio, settings.threshold) {
                    Ok(true) => break,
                    Ok(false) => continue,
                    Err(e) => {
                        tracing::trace!("Suppressed visibility event: {}", e);
                        return;
                    }
                }
            }
        }
    }

    // Latched: stop observing, later signals fail to send and are ignored
    drop(visibility_rx);
    publish(&frame_tx, &counter);
    tracing::debug!(
        "Counter {} visible, stepping by {} every {}ms",
        counter.target(),
        counter.step(),
        settings.period_ms
    );

    // 2. Step on a fixed period until settled
    let mut interval = tokio::time::interval(settings.period());
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately
    interval.tick().await;

    while !counter.is_settled() {
        tokio::select! {
            biased;
            _ = &mut cancel_rx => {
                counter.cancel();
                tracing::debug!("Counter {} torn down at {}", counter.target(), counter.display_value());
                return;
            }
            _ = interval.tick() => {
                match counter.tick() {
                    Ok(Some(_)) => publish(&frame_tx, &counter),
                    Ok(None) => break,
                    Err(e) => {
                        tracing::trace!("Suppressed timer event: {}", e);
                        return;
                    }
                }
            }
        }
    }

    tracing::debug!("Counter settled at {}", counter.rendered());
}

fn publish(frame_tx: &watch::Sender<RevealFrame>, counter: &RevealCounter) {
    // send_replace never fails, even with no receivers left
    frame_tx.send_replace(RevealFrame {
        value: counter.display_value(),
        phase: counter.phase(),
    });
}
