//! Integration tests for the full billing flow.
//!
//! Store → aggregate → composed views → queries, with fixed dates so every
//! aging result is reproducible.

#[cfg(test)]
mod tests {
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};

    use bunai_billing::{BillInput, BillStatus};
    use bunai_catalog::{MaterialId, PaymentTermId, TaxRateDetails, TaxRateId};
    use bunai_core::DomainError;
    use bunai_invoicing::amount_to_words;
    use bunai_parties::{BuyerDetails, BuyerId, DalalDetails, DalalId};
    use bunai_reports::{FilterSpec, StatusFilter, dashboard_stats, filter_bills, urgent_bills};

    use crate::memory::{InMemoryStore, StoreError};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    struct Fixture {
        store: InMemoryStore,
        buyer_id: BuyerId,
        dalal_id: DalalId,
        tax_id: TaxRateId,
    }

    fn setup() -> Fixture {
        bunai_observability::init();

        let store = InMemoryStore::new();
        store.seed_defaults().unwrap();

        let buyer_id = store
            .add_buyer(BuyerDetails {
                name: "Jalaram Ltd.".to_string(),
                contact_number: "8574968596".to_string(),
                address: Some("Adajan, Surat".to_string()),
                gst_number: Some("DEFG446734".to_string()),
            })
            .unwrap();
        let dalal_id = store
            .add_dalal(DalalDetails {
                name: "Kishan Patel".to_string(),
                contact_number: "7418529635".to_string(),
                address: None,
            })
            .unwrap();
        let tax_id = store
            .add_tax_rate(TaxRateDetails {
                name: "GST".to_string(),
                percentage: 10.0,
            })
            .unwrap();

        Fixture {
            store,
            buyer_id,
            dalal_id,
            tax_id,
        }
    }

    impl Fixture {
        fn war_to_war_term(&self) -> PaymentTermId {
            self.store
                .payment_terms()
                .unwrap()
                .iter()
                .find(|t| t.days() == 10)
                .unwrap()
                .id_typed()
        }

        fn silk(&self) -> MaterialId {
            self.store
                .materials()
                .unwrap()
                .iter()
                .find(|m| m.name() == "Silk")
                .unwrap()
                .id_typed()
        }

        fn bill_input(&self) -> BillInput {
            BillInput {
                bill_no: 101,
                date: date(2025, 8, 5),
                buyer_id: self.buyer_id,
                dalal_id: self.dalal_id,
                material_id: self.silk(),
                term_id: self.war_to_war_term(),
                tax_id: self.tax_id,
                meter: 50.0,
                price_rate: 200.0,
                chalan_no: "8526".to_string(),
                taka_count: 120,
            }
        }
    }

    #[test]
    fn create_bill_and_read_overdue_view() {
        let fx = setup();
        let bill_id = fx
            .store
            .create_bill(fx.bill_input(), at(2025, 8, 5))
            .unwrap();

        let views = fx.store.bill_views(date(2025, 8, 20)).unwrap();
        assert_eq!(views.len(), 1);
        let view = &views[0];

        assert_eq!(view.id, bill_id);
        assert_eq!(view.base_amount, 10_000.0);
        assert_eq!(view.tax_amount, 1_000.0);
        assert_eq!(view.total_amount, 11_000.0);
        assert_eq!(view.due_date, date(2025, 8, 15));
        assert_eq!(view.days_to_due, -5);
        assert_eq!(view.status, BillStatus::Overdue);

        assert_eq!(
            amount_to_words(view.total_amount),
            "Eleven Thousand Rupees Only"
        );
    }

    #[test]
    fn aging_is_rederived_on_every_read() {
        let fx = setup();
        fx.store
            .create_bill(fx.bill_input(), at(2025, 8, 5))
            .unwrap();

        let soon = &fx.store.bill_views(date(2025, 8, 12)).unwrap()[0];
        assert_eq!(soon.days_to_due, 3);
        assert_eq!(soon.status, BillStatus::DueSoon);

        let pending = &fx.store.bill_views(date(2025, 8, 1)).unwrap()[0];
        assert_eq!(pending.days_to_due, 14);
        assert_eq!(pending.status, BillStatus::Pending);
    }

    #[test]
    fn editing_tax_rate_does_not_rewrite_existing_bills() {
        let fx = setup();
        fx.store
            .create_bill(fx.bill_input(), at(2025, 8, 5))
            .unwrap();

        fx.store
            .update_tax_rate(
                fx.tax_id,
                TaxRateDetails {
                    name: "GST".to_string(),
                    percentage: 18.0,
                },
            )
            .unwrap();

        let old = &fx.store.bill_views(date(2025, 8, 10)).unwrap()[0];
        assert_eq!(old.tax_percentage, 10.0);
        assert_eq!(old.tax_amount, 1_000.0);

        // A bill raised after the edit prices against the new rate.
        let mut input = fx.bill_input();
        input.bill_no = 102;
        input.date = date(2025, 8, 11);
        fx.store.create_bill(input, at(2025, 8, 11)).unwrap();

        let views = fx.store.bill_views(date(2025, 8, 12)).unwrap();
        let new = views.iter().find(|v| v.bill_no == 102).unwrap();
        assert_eq!(new.tax_percentage, 18.0);
        assert_eq!(new.tax_amount, 1_800.0);
    }

    #[test]
    fn revise_recomputes_and_mark_paid_is_terminal() {
        let fx = setup();
        let bill_id = fx
            .store
            .create_bill(fx.bill_input(), at(2025, 8, 5))
            .unwrap();

        let mut input = fx.bill_input();
        input.meter = 100.0;
        input.price_rate = 50.0;
        fx.store
            .revise_bill(bill_id, input, at(2025, 8, 6))
            .unwrap();

        let view = &fx.store.bill_views(date(2025, 8, 6)).unwrap()[0];
        assert_eq!(view.base_amount, 5_000.0);
        assert_eq!(view.tax_amount, 500.0);

        fx.store.mark_bill_paid(bill_id, at(2025, 8, 7)).unwrap();
        // Paid wins over aging, even long past due.
        let view = &fx.store.bill_views(date(2026, 1, 1)).unwrap()[0];
        assert_eq!(view.status, BillStatus::Paid);

        let err = fx.store.mark_bill_paid(bill_id, at(2025, 8, 8)).unwrap_err();
        match err {
            StoreError::Domain(DomainError::Conflict(_)) => {}
            _ => panic!("Expected Conflict for double mark-paid"),
        }
    }

    #[test]
    fn create_bill_with_missing_reference_names_it() {
        let fx = setup();
        let mut input = fx.bill_input();
        input.dalal_id = DalalId::new(bunai_core::RecordId::new(999));

        let err = fx.store.create_bill(input, at(2025, 8, 5)).unwrap_err();
        match err {
            StoreError::Domain(DomainError::ReferenceNotFound { entity, id }) => {
                assert_eq!(entity, "dalal");
                assert_eq!(id, 999);
            }
            _ => panic!("Expected ReferenceNotFound for missing dalal"),
        }
    }

    #[test]
    fn referenced_records_cannot_be_removed() {
        let fx = setup();
        fx.store
            .create_bill(fx.bill_input(), at(2025, 8, 5))
            .unwrap();

        let err = fx.store.remove_buyer(fx.buyer_id).unwrap_err();
        match err {
            StoreError::Domain(DomainError::Conflict(_)) => {}
            _ => panic!("Expected Conflict for removing a referenced buyer"),
        }

        // Deleting the bill frees the reference.
        let views = fx.store.bill_views(date(2025, 8, 5)).unwrap();
        fx.store.delete_bill(views[0].id, at(2025, 8, 6)).unwrap();
        fx.store.remove_buyer(fx.buyer_id).unwrap();
    }

    #[test]
    fn queries_agree_with_store_contents() {
        let fx = setup();

        let mut first = fx.bill_input();
        first.bill_no = 101;
        first.date = date(2025, 8, 5);
        fx.store.create_bill(first, at(2025, 8, 5)).unwrap();

        let mut second = fx.bill_input();
        second.bill_no = 102;
        second.date = date(2025, 9, 1);
        second.meter = 25.0;
        let second_id = fx.store.create_bill(second, at(2025, 9, 1)).unwrap();
        fx.store.mark_bill_paid(second_id, at(2025, 9, 2)).unwrap();

        let today = date(2025, 9, 5);
        let views = fx.store.bill_views(today).unwrap();

        // Most recent first.
        let nos: Vec<u32> = views.iter().map(|v| v.bill_no).collect();
        assert_eq!(nos, vec![102, 101]);

        let pending = filter_bills(
            &views,
            &FilterSpec {
                status: StatusFilter::Pending,
                ..FilterSpec::default()
            },
        );
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].bill_no, 101);

        let urgent = urgent_bills(&views);
        assert_eq!(urgent.len(), 1);
        assert_eq!(urgent[0].bill_no, 101);

        let stats = dashboard_stats(&views);
        assert_eq!(stats.total_bills, 2);
        assert_eq!(stats.pending_bills, 1);
        assert_eq!(stats.total_revenue, 11_000.0 + 5_500.0);
        assert_eq!(stats.pending_amount, 11_000.0);
    }
}
