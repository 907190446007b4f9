//! Typed resource ID definitions.
//!
//! Each type declares its scope and the ordered segments under each
//! provider namespace. Parsing and formatting are shared through
//! [`IdSchema`](crate::IdSchema).

use crate::define_resource_id;

// =============================================================================
// Scopes
// =============================================================================

define_resource_id! {
    /// `/subscriptions/{subscription_id}`
    pub struct SubscriptionId: "subscription" {
        scope: subscription,
    }
}

define_resource_id! {
    /// `/subscriptions/{subscription_id}/resourceGroups/{resource_group}`
    pub struct ResourceGroupId: "resource_group" {
        scope: resource_group,
    }
}

define_resource_id! {
    pub struct ManagementGroupId: "management_group" {
        scope: tenant,
        providers "Microsoft.Management" {
            name: "managementGroups",
        }
    }
}

impl ResourceGroupId {
    /// Returns the subscription containing this resource group.
    #[must_use]
    pub fn subscription(&self) -> SubscriptionId {
        SubscriptionId::new(&self.subscription_id)
    }
}

// =============================================================================
// Billing
// =============================================================================

define_resource_id! {
    pub struct BillingAccountId: "billing_account" {
        scope: tenant,
        providers "Microsoft.Billing" {
            name: "billingAccounts",
        }
    }
}

define_resource_id! {
    pub struct BillingDepartmentId: "billing_department" {
        scope: tenant,
        providers "Microsoft.Billing" {
            billing_account_name: "billingAccounts",
            name: "departments",
        }
    }
}

impl BillingDepartmentId {
    #[must_use]
    pub fn billing_account_id(&self) -> BillingAccountId {
        BillingAccountId::new(&self.billing_account_name)
    }
}

// =============================================================================
// Security
// =============================================================================

define_resource_id! {
    /// Defender for Cloud pricing tier, one per subscription and plan.
    pub struct SecurityCenterPricingId: "security_center_pricing" {
        scope: subscription,
        providers "Microsoft.Security" {
            name: "pricings",
        }
    }
}

// =============================================================================
// Networking
// =============================================================================

define_resource_id! {
    pub struct VirtualNetworkId: "virtual_network" {
        scope: resource_group,
        providers "Microsoft.Network" {
            name: "virtualNetworks",
        }
    }
}

define_resource_id! {
    pub struct SubnetId: "subnet" {
        scope: resource_group,
        providers "Microsoft.Network" {
            virtual_network_name: "virtualNetworks",
            name: "subnets",
        }
    }
}

impl SubnetId {
    #[must_use]
    pub fn virtual_network_id(&self) -> VirtualNetworkId {
        VirtualNetworkId::new(
            &self.subscription_id,
            &self.resource_group,
            &self.virtual_network_name,
        )
    }
}

// =============================================================================
// Storage and Key Vault
// =============================================================================

define_resource_id! {
    pub struct StorageAccountId: "storage_account" {
        scope: resource_group,
        providers "Microsoft.Storage" {
            name: "storageAccounts",
        }
    }
}

define_resource_id! {
    pub struct KeyVaultId: "key_vault" {
        scope: resource_group,
        providers "Microsoft.KeyVault" {
            name: "vaults",
        }
    }
}

define_resource_id! {
    /// Diagnostic setting attached to a key vault. The setting lives under a
    /// second `providers` segment nested inside the vault's ID.
    pub struct KeyVaultDiagnosticSettingId: "key_vault_diagnostic_setting" {
        scope: resource_group,
        providers "Microsoft.KeyVault" {
            vault_name: "vaults",
        }
        providers "Microsoft.Insights" {
            name: "diagnosticSettings",
        }
    }
}

impl KeyVaultDiagnosticSettingId {
    #[must_use]
    pub fn key_vault_id(&self) -> KeyVaultId {
        KeyVaultId::new(&self.subscription_id, &self.resource_group, &self.vault_name)
    }
}

// =============================================================================
// Monitoring
// =============================================================================

define_resource_id! {
    /// Log Analytics workspace.
    pub struct WorkspaceId: "log_analytics_workspace" {
        scope: resource_group,
        providers "Microsoft.OperationalInsights" {
            name: "workspaces",
        }
    }
}

// =============================================================================
// SQL
// =============================================================================

define_resource_id! {
    pub struct ManagedInstanceId: "mssql_managed_instance" {
        scope: resource_group,
        providers "Microsoft.Sql" {
            name: "managedInstances",
        }
    }
}

define_resource_id! {
    pub struct ManagedDatabaseId: "mssql_managed_database" {
        scope: resource_group,
        providers "Microsoft.Sql" {
            managed_instance_name: "managedInstances",
            name: "databases",
        }
    }
}

impl ManagedDatabaseId {
    #[must_use]
    pub fn managed_instance_id(&self) -> ManagedInstanceId {
        ManagedInstanceId::new(
            &self.subscription_id,
            &self.resource_group,
            &self.managed_instance_name,
        )
    }
}

// =============================================================================
// Messaging
// =============================================================================

define_resource_id! {
    pub struct ServiceBusTopicId: "servicebus_topic" {
        scope: resource_group,
        providers "Microsoft.ServiceBus" {
            namespace_name: "namespaces",
            name: "topics",
        }
    }
}

define_resource_id! {
    /// Topic subscription. Its `subscriptions` segment is distinct from the
    /// Azure subscription at the start of the ID.
    pub struct ServiceBusSubscriptionId: "servicebus_subscription" {
        scope: resource_group,
        providers "Microsoft.ServiceBus" {
            namespace_name: "namespaces",
            topic_name: "topics",
            name: "subscriptions",
        }
    }
}

impl ServiceBusSubscriptionId {
    #[must_use]
    pub fn topic_id(&self) -> ServiceBusTopicId {
        ServiceBusTopicId::new(
            &self.subscription_id,
            &self.resource_group,
            &self.namespace_name,
            &self.topic_name,
        )
    }
}

// =============================================================================
// Bot Service
// =============================================================================

define_resource_id! {
    pub struct BotServiceId: "bot_service" {
        scope: resource_group,
        providers "Microsoft.BotService" {
            name: "botServices",
        }
    }
}

define_resource_id! {
    pub struct BotConnectionId: "bot_connection" {
        scope: resource_group,
        providers "Microsoft.BotService" {
            bot_service_name: "botServices",
            connection_name: "connections",
        }
    }
}

impl BotConnectionId {
    #[must_use]
    pub fn bot_service_id(&self) -> BotServiceId {
        BotServiceId::new(
            &self.subscription_id,
            &self.resource_group,
            &self.bot_service_name,
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
