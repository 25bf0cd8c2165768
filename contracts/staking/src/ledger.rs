use common::{pool::check_amount, storage, PoolError, PrincipalLedger};
use soroban_sdk::{token, vec, Address, Env, Vec};

/// Fungible principal: the unit is a token amount and the position's
/// `principal_amount` is the whole record, so nothing extra is stored.
pub struct TokenLedger {
    stake_token: Address,
}

impl TokenLedger {
    pub fn new(stake_token: Address) -> Self {
        Self { stake_token }
    }
}

impl PrincipalLedger for TokenLedger {
    type Unit = i128;

    fn principal_units(&self, amount: &i128) -> Result<i128, PoolError> {
        check_amount(*amount)?;
        Ok(*amount)
    }

    fn deposit_principal(
        &self,
        _env: &Env,
        _participant: &Address,
        _amount: &i128,
    ) -> Result<(), PoolError> {
        Ok(())
    }

    fn withdraw_principal(
        &self,
        _env: &Env,
        _participant: &Address,
        _amount: &i128,
    ) -> Result<(), PoolError> {
        Ok(())
    }

    fn transfer_in(&self, env: &Env, participant: &Address, amount: &i128) {
        token::Client::new(env, &self.stake_token).transfer(
            participant,
            &env.current_contract_address(),
            amount,
        );
    }

    fn transfer_out(&self, env: &Env, participant: &Address, amount: &i128) {
        token::Client::new(env, &self.stake_token).transfer(
            &env.current_contract_address(),
            participant,
            amount,
        );
    }

    fn held_units(&self, env: &Env, participant: &Address) -> Vec<i128> {
        let staked = storage::load_position(env, participant).principal_amount;
        if staked > 0 {
            vec![env, staked]
        } else {
            Vec::new(env)
        }
    }
}
