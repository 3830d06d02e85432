use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    shipments_received: AtomicU64,
    doses_received: AtomicU64,
    doses_administered: AtomicU64,
    doses_lost: AtomicU64,
    reconciliations: AtomicU64,
    reconciliation_adjustments: AtomicU64,
    workflow_failures: AtomicU64,
}

impl Metrics {
    pub fn record_shipment(&self, passed_inspection: u32) {
        self.shipments_received.fetch_add(1, Ordering::Relaxed);
        self.doses_received
            .fetch_add(u64::from(passed_inspection), Ordering::Relaxed);
    }

    pub fn record_administration(&self, doses: u32) {
        self.doses_administered
            .fetch_add(u64::from(doses), Ordering::Relaxed);
    }

    pub fn record_loss(&self, doses: u32) {
        self.doses_lost.fetch_add(u64::from(doses), Ordering::Relaxed);
    }

    pub fn record_reconciliation(&self, adjusted: bool) {
        self.reconciliations.fetch_add(1, Ordering::Relaxed);
        if adjusted {
            self.reconciliation_adjustments
                .fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_workflow_failure(&self) {
        self.workflow_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let shipments = self.shipments_received.load(Ordering::Relaxed);
        let received = self.doses_received.load(Ordering::Relaxed);
        let administered = self.doses_administered.load(Ordering::Relaxed);
        let lost = self.doses_lost.load(Ordering::Relaxed);
        let reconciliations = self.reconciliations.load(Ordering::Relaxed);
        let adjustments = self.reconciliation_adjustments.load(Ordering::Relaxed);
        let failures = self.workflow_failures.load(Ordering::Relaxed);

        format!(
            "# TYPE vaxtrack_shipments_received_total counter\n\
vaxtrack_shipments_received_total {}\n\
# TYPE vaxtrack_doses_received_total counter\n\
vaxtrack_doses_received_total {}\n\
# TYPE vaxtrack_doses_administered_total counter\n\
vaxtrack_doses_administered_total {}\n\
# TYPE vaxtrack_doses_lost_total counter\n\
vaxtrack_doses_lost_total {}\n\
# TYPE vaxtrack_reconciliations_total counter\n\
vaxtrack_reconciliations_total {}\n\
# TYPE vaxtrack_reconciliation_adjustments_total counter\n\
vaxtrack_reconciliation_adjustments_total {}\n\
# TYPE vaxtrack_workflow_failures_total counter\n\
vaxtrack_workflow_failures_total {}\n",
            shipments, received, administered, lost, reconciliations, adjustments, failures
        )
    }
}
