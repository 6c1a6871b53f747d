//! End-to-end tests for the order flow: session, cart, admission, and the
//! kitchen board.

use common::ItemId;
use domain::{
    Access, Cart, Catalog, DomainError, FulfillmentType, PaymentMethod, Role, SessionAuthority,
    Stage,
};
use kitchen::{AdmissionService, Config, KitchenPipeline};

fn desk() -> AdmissionService {
    AdmissionService::new(KitchenPipeline::new())
}

fn cart_with(catalog: &Catalog, ids: &[u32]) -> Cart {
    let mut cart = Cart::default();
    for &id in ids {
        cart.add_item(catalog.get(ItemId::new(id)).unwrap());
    }
    cart
}

mod order_flow {
    use super::*;

    #[tokio::test]
    async fn admitted_order_walks_the_board() {
        let catalog = Catalog::standard();
        let desk = desk();
        let mut cart = cart_with(&catalog, &[1, 7, 5]);

        let order = desk
            .finalize(&mut cart, PaymentMethod::Cash, FulfillmentType::DineIn, "Table 3")
            .await
            .unwrap();

        // Three lines, visible on the pending column.
        assert_eq!(order.lines().len(), 3);
        let pending = desk.pipeline().by_stage(Stage::Pending).await;
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id(), order.id());

        // One advance: on the cooking column, gone from pending.
        desk.pipeline().advance(order.id()).await.unwrap();
        assert!(desk.pipeline().by_stage(Stage::Pending).await.is_empty());
        let cooking = desk.pipeline().by_stage(Stage::Cooking).await;
        assert_eq!(cooking.len(), 1);
        assert_eq!(cooking[0].id(), order.id());
    }

    #[tokio::test]
    async fn four_advances_reach_served_and_a_fifth_fails() {
        let catalog = Catalog::standard();
        let desk = desk();
        let mut cart = cart_with(&catalog, &[6]);

        let order = desk
            .finalize(&mut cart, PaymentMethod::Upi, FulfillmentType::Takeaway, "Takeaway")
            .await
            .unwrap();
        let id = order.id();

        // Pending is entered at admission; three advances span the rest.
        assert_eq!(desk.pipeline().advance(id).await.unwrap(), Stage::Cooking);
        assert_eq!(desk.pipeline().advance(id).await.unwrap(), Stage::Ready);
        assert_eq!(desk.pipeline().advance(id).await.unwrap(), Stage::Served);

        let result = desk.pipeline().advance(id).await;
        assert!(matches!(result, Err(DomainError::InvalidTransition { .. })));

        // Terminal orders stay on the served column for billing.
        assert_eq!(desk.pipeline().served().await.len(), 1);
    }

    #[tokio::test]
    async fn board_columns_stay_stage_homogeneous_and_oldest_first() {
        let catalog = Catalog::standard();
        let desk = desk();

        let mut ids = Vec::new();
        for _ in 0..4 {
            let mut cart = cart_with(&catalog, &[2, 8]);
            let order = desk
                .finalize(&mut cart, PaymentMethod::Card, FulfillmentType::DineIn, "Table 1")
                .await
                .unwrap();
            ids.push(order.id());
        }

        // Move the two newest into cooking.
        desk.pipeline().advance(ids[2]).await.unwrap();
        desk.pipeline().advance(ids[3]).await.unwrap();

        let pending = desk.pipeline().by_stage(Stage::Pending).await;
        assert!(pending.iter().all(|o| o.stage() == Stage::Pending));
        assert_eq!(
            pending.iter().map(|o| o.id()).collect::<Vec<_>>(),
            vec![ids[0], ids[1]]
        );

        let cooking = desk.pipeline().by_stage(Stage::Cooking).await;
        assert!(cooking.iter().all(|o| o.stage() == Stage::Cooking));
        assert_eq!(
            cooking.iter().map(|o| o.id()).collect::<Vec<_>>(),
            vec![ids[2], ids[3]]
        );
    }

    #[tokio::test]
    async fn snapshot_isolation_across_reused_carts() {
        let catalog = Catalog::standard();
        let desk = desk();
        let mut cart = cart_with(&catalog, &[1, 1, 7]);

        let first = desk
            .finalize(&mut cart, PaymentMethod::Cash, FulfillmentType::DineIn, "Table 3")
            .await
            .unwrap();
        assert_eq!(first.total().rupees(), 536);

        // Same cart object, same item ids, different quantities.
        for _ in 0..5 {
            cart.add_item(catalog.get(ItemId::new(1)).unwrap());
        }
        let second = desk
            .finalize(&mut cart, PaymentMethod::Card, FulfillmentType::Takeaway, "Takeaway")
            .await
            .unwrap();

        let stored_first = desk.pipeline().get(first.id()).await.unwrap();
        assert_eq!(stored_first.total().rupees(), 536);
        assert_ne!(second.total(), stored_first.total());
        assert_ne!(second.id(), first.id());
    }

    #[tokio::test]
    async fn failed_admission_leaves_cart_and_pipeline_untouched() {
        let desk = desk();
        let mut cart = Cart::default();

        let result = desk
            .finalize(&mut cart, PaymentMethod::Cash, FulfillmentType::DineIn, "Table 2")
            .await;
        assert!(matches!(result, Err(DomainError::InvalidState { .. })));
        assert!(desk.pipeline().is_empty().await);

        // The next successful admission still uses the first ticket.
        let catalog = Catalog::standard();
        cart.add_item(catalog.get(ItemId::new(6)).unwrap());
        let order = desk
            .finalize(&mut cart, PaymentMethod::Cash, FulfillmentType::DineIn, "Table 2")
            .await
            .unwrap();
        assert_eq!(order.id().ticket(), Config::default().first_ticket);
    }
}

mod gated_console {
    use super::*;

    #[tokio::test]
    async fn staff_session_takes_an_order_end_to_end() {
        let mut auth = SessionAuthority::new();
        auth.login(Role::Staff, "Priya");
        assert_eq!(auth.authorize(Role::Staff), Access::Authorized);

        let catalog = Catalog::standard();
        let desk = desk();
        let mut cart = cart_with(&catalog, &[11, 12]);

        let order = desk
            .finalize(&mut cart, PaymentMethod::Upi, FulfillmentType::Takeaway, "Takeaway")
            .await
            .unwrap();
        assert_eq!(order.stage(), Stage::Pending);

        // Logging out revokes access to the console but the admitted order
        // stays in the pipeline.
        auth.logout();
        assert_eq!(auth.authorize(Role::Staff), Access::Unauthenticated);
        assert_eq!(desk.pipeline().len().await, 1);
    }
}

mod shared_board {
    use super::*;

    #[tokio::test]
    async fn two_terminals_cannot_double_advance_one_order() {
        let catalog = Catalog::standard();
        let desk = desk();
        let mut cart = cart_with(&catalog, &[3]);
        let order = desk
            .finalize(&mut cart, PaymentMethod::Cash, FulfillmentType::DineIn, "Table 5")
            .await
            .unwrap();

        let terminal_a = desk.pipeline().clone();
        let terminal_b = desk.pipeline().clone();
        let id = order.id();

        let (a, b) = tokio::join!(terminal_a.advance(id), terminal_b.advance(id));
        a.unwrap();
        b.unwrap();

        // Both advances applied, one stage each, in some order.
        assert_eq!(desk.pipeline().get(id).await.unwrap().stage(), Stage::Ready);
    }
}
