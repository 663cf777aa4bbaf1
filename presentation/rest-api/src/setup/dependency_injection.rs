use std::sync::Arc;

use logger::TracingLogger;
use persistence::order::repository::OrderRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::referral::repository::ReferralRepositoryPostgres;
use persistence::voucher::repository::VoucherRepositoryPostgres;

use gemini::client::GeminiClient;
use gemini::headline_generator::HeadlineGeneratorGemini;

use business::application::headline::apply::ApplyHeadlineUseCaseImpl;
use business::application::headline::generate::GenerateHeadlinesUseCaseImpl;
use business::application::order::create::CreateOrderUseCaseImpl;
use business::application::order::get_all::GetAllOrdersUseCaseImpl;
use business::application::order::update_status::UpdateOrderStatusUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::referral::create::CreateReferralUseCaseImpl;
use business::application::referral::get_all::GetAllReferralsUseCaseImpl;
use business::application::voucher::create::CreateVoucherUseCaseImpl;
use business::application::voucher::get_all::GetAllVouchersUseCaseImpl;
use business::application::voucher::set_active::SetVoucherActiveUseCaseImpl;
use business::domain::headline::rate_limit::FixedWindowLimiter;

use crate::config::gemini_config::GeminiConfig;
use crate::config::headline_config::HeadlineConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub headline_api: crate::api::headline::routes::HeadlineApi,
    pub product_api: crate::api::product::routes::ProductApi,
    pub order_api: crate::api::order::routes::OrderApi,
    pub voucher_api: crate::api::voucher::routes::VoucherApi,
    pub referral_api: crate::api::referral::routes::ReferralApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let order_repository = Arc::new(OrderRepositoryPostgres::new(pool.clone()));
        let voucher_repository = Arc::new(VoucherRepositoryPostgres::new(pool.clone()));
        let referral_repository = Arc::new(ReferralRepositoryPostgres::new(pool));

        let gemini_config = GeminiConfig::from_env();
        let gemini_client = GeminiClient::new(
            gemini_config.api_key,
            gemini_config.model,
            gemini_config.timeout,
        );
        let headline_generator = Arc::new(HeadlineGeneratorGemini::new(gemini_client));

        // One limiter instance for the process; the scope decides whether
        // admins share its window or get one each.
        let headline_config = HeadlineConfig::from_env();
        let headline_limiter = Arc::new(FixedWindowLimiter::new(
            headline_config.rate_limit,
            headline_config.rate_window,
        ));

        // Headline use cases
        let generate_headlines_use_case = Arc::new(GenerateHeadlinesUseCaseImpl {
            generator: headline_generator,
            limiter: headline_limiter,
            scope: headline_config.rate_scope,
            logger: logger.clone(),
        });
        let apply_headline_use_case = Arc::new(ApplyHeadlineUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Product use cases
        let create_product_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_product_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_product_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Order use cases
        let create_order_use_case = Arc::new(CreateOrderUseCaseImpl {
            repository: order_repository.clone(),
            product_repository,
            logger: logger.clone(),
        });
        let get_all_orders_use_case = Arc::new(GetAllOrdersUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let update_order_status_use_case = Arc::new(UpdateOrderStatusUseCaseImpl {
            repository: order_repository,
            logger: logger.clone(),
        });

        // Voucher use cases
        let create_voucher_use_case = Arc::new(CreateVoucherUseCaseImpl {
            repository: voucher_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_vouchers_use_case = Arc::new(GetAllVouchersUseCaseImpl {
            repository: voucher_repository.clone(),
            logger: logger.clone(),
        });
        let set_voucher_active_use_case = Arc::new(SetVoucherActiveUseCaseImpl {
            repository: voucher_repository,
            logger: logger.clone(),
        });

        // Referral use cases
        let create_referral_use_case = Arc::new(CreateReferralUseCaseImpl {
            repository: referral_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_referrals_use_case = Arc::new(GetAllReferralsUseCaseImpl {
            repository: referral_repository,
            logger,
        });

        let headline_api = crate::api::headline::routes::HeadlineApi::new(
            generate_headlines_use_case,
            apply_headline_use_case,
        );
        let product_api = crate::api::product::routes::ProductApi::new(
            create_product_use_case,
            get_all_products_use_case,
            get_product_by_id_use_case,
            update_product_use_case,
        );
        let order_api = crate::api::order::routes::OrderApi::new(
            create_order_use_case,
            get_all_orders_use_case,
            update_order_status_use_case,
        );
        let voucher_api = crate::api::voucher::routes::VoucherApi::new(
            create_voucher_use_case,
            get_all_vouchers_use_case,
            set_voucher_active_use_case,
        );
        let referral_api = crate::api::referral::routes::ReferralApi::new(
            create_referral_use_case,
            get_all_referrals_use_case,
        );

        Ok(Self {
            health_api,
            headline_api,
            product_api,
            order_api,
            voucher_api,
            referral_api,
        })
    }
}
