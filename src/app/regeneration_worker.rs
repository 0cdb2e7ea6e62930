//! Hintergrund-Thread für Zell-Regenerationen.
//!
//! Aufträge kommen über einen Kanal, Ergebnisse gehen als `AppIntent`
//! zurück an die UI-Schleife. Staut sich die Warteschlange, wird nur der
//! jüngste Auftrag ausgeführt; veraltete Ergebnisse verwirft ohnehin der
//! `HexCellStore` anhand des Tokens.

use super::AppIntent;
use crate::core::{MetricsSource, RegenerationRequest};
use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub struct RegenerationWorker {
    requests: Option<Sender<RegenerationRequest>>,
    results: Receiver<AppIntent>,
    handle: Option<JoinHandle<()>>,
}

impl RegenerationWorker {
    /// Startet den Worker-Thread mit eigener Messwert-Quelle.
    pub fn spawn(source: Box<dyn MetricsSource>) -> std::io::Result<Self> {
        let (request_tx, request_rx) = unbounded::<RegenerationRequest>();
        let (result_tx, result_rx) = unbounded::<AppIntent>();

        let handle = thread::Builder::new()
            .name("hex-regeneration".into())
            .spawn(move || run(request_rx, result_tx, source))?;

        Ok(Self {
            requests: Some(request_tx),
            results: result_rx,
            handle: Some(handle),
        })
    }

    /// Reiht einen Auftrag ein.
    pub fn submit(&self, request: RegenerationRequest) -> anyhow::Result<()> {
        let sender = self
            .requests
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Regenerations-Worker ist beendet"))?;
        sender
            .send(request)
            .map_err(|_| anyhow::anyhow!("Regenerations-Worker nicht erreichbar"))
    }

    /// Alle bisher fertigen Ergebnisse, ohne zu blockieren.
    pub fn poll(&self) -> Vec<AppIntent> {
        self.results.try_iter().collect()
    }

    /// Wartet höchstens `timeout` auf das nächste Ergebnis.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<AppIntent> {
        match self.results.recv_timeout(timeout) {
            Ok(intent) => Some(intent),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => {
                log::warn!("Regenerations-Worker unerwartet beendet");
                None
            }
        }
    }
}

impl Drop for RegenerationWorker {
    fn drop(&mut self) {
        // Kanal schließen beendet die Worker-Schleife
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("Regenerations-Worker ist abgestürzt");
            }
        }
    }
}

fn run(
    requests: Receiver<RegenerationRequest>,
    results: Sender<AppIntent>,
    mut source: Box<dyn MetricsSource>,
) {
    while let Ok(first) = requests.recv() {
        let latest = requests.try_iter().fold(first, |_, next| next);
        if latest.token != first.token {
            log::debug!(
                "Regenerationen bis Token {} übersprungen",
                latest.token.0 - 1
            );
        }

        let intent = match latest.execute(source.as_mut()) {
            Ok(cells) => AppIntent::CellsGenerated {
                token: latest.token,
                cells,
            },
            Err(e) => AppIntent::CellsGenerationFailed {
                token: latest.token,
                message: e.to_string(),
            },
        };
        if results.send(intent).is_err() {
            break;
        }
    }
    log::debug!("Regenerations-Worker beendet");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GenerationToken, LatLon, RingPolicy, SyntheticMetrics};

    fn request(token: u64, resolution: u8) -> RegenerationRequest {
        RegenerationRequest {
            token: GenerationToken(token),
            center: LatLon::new(-37.915, 145.129),
            resolution,
            policy: RingPolicy::default(),
        }
    }

    #[test]
    fn worker_returns_generated_cells() {
        let worker =
            RegenerationWorker::spawn(Box::new(SyntheticMetrics::seeded(1))).expect("Thread-Start");
        worker.submit(request(1, 10)).expect("Auftrag senden");

        let intent = worker
            .recv_timeout(Duration::from_secs(10))
            .expect("Ergebnis erwartet");
        match intent {
            AppIntent::CellsGenerated { token, cells } => {
                assert_eq!(token, GenerationToken(1));
                assert_eq!(cells.len(), 37);
            }
            other => panic!("unerwartetes Ergebnis: {other:?}"),
        }
    }

    #[test]
    fn drop_joins_idle_worker() {
        let worker =
            RegenerationWorker::spawn(Box::new(SyntheticMetrics::seeded(2))).expect("Thread-Start");
        assert!(worker.poll().is_empty());
        drop(worker);
    }
}
