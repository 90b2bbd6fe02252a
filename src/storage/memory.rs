use std::collections::BTreeMap;

use super::error::StorageError;
use super::traits::{AccountPolicy, Registry};
use crate::domain::{Account, AccountId, Customer, DomainError, IdentityCode};

/// In-memory registry backend. Everything lives for the duration of
/// the process; account numbers are handed out sequentially from 1.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    policy: AccountPolicy,
    customers: BTreeMap<IdentityCode, Customer>,
    accounts: BTreeMap<AccountId, Account>,
    next_account: u32,
}

impl InMemoryRegistry {
    pub fn new(policy: AccountPolicy) -> Self {
        Self {
            policy,
            customers: BTreeMap::new(),
            accounts: BTreeMap::new(),
            next_account: 0,
        }
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    fn next_account_id(&mut self) -> AccountId {
        self.next_account += 1;
        AccountId::new(self.next_account)
    }
}

impl Registry for InMemoryRegistry {
    fn register_customer(
        &mut self,
        customer: Customer,
    ) -> Result<Option<AccountId>, StorageError> {
        if self.customers.contains_key(customer.identity()) {
            return Err(StorageError::DuplicateIdentity);
        }

        let identity = customer.identity().clone();
        self.customers.insert(identity.clone(), customer);

        if self.policy.auto_open_on_register {
            let id = self.open_account(&identity)?;
            Ok(Some(id))
        } else {
            Ok(None)
        }
    }

    fn open_account(&mut self, identity: &IdentityCode) -> Result<AccountId, StorageError> {
        if !self.customers.contains_key(identity) {
            return Err(StorageError::IdentityNotFound);
        }

        let id = self.next_account_id();
        let account = Account::new(
            id,
            self.policy.branch_code.clone(),
            identity.clone(),
            self.policy.limits,
        );
        self.accounts.insert(id, account);

        Ok(id)
    }

    fn find_customer(&self, identity: &IdentityCode) -> Option<&Customer> {
        self.customers.get(identity)
    }

    fn accounts_of(&self, identity: &IdentityCode) -> Vec<&Account> {
        // Sequential ids make ascending id order the opening order
        self.accounts
            .values()
            .filter(|account| account.owner() == identity)
            .collect()
    }

    fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(&id)
    }

    fn with_account<T, F>(&mut self, id: AccountId, update_fn: F) -> Result<T, StorageError>
    where
        F: FnOnce(&mut Account) -> Result<T, DomainError>,
    {
        let account = self
            .accounts
            .get_mut(&id)
            .ok_or(StorageError::AccountNotFound(id))?;

        update_fn(account).map_err(StorageError::from)
    }
}
