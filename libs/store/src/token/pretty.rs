use std::fmt::{Debug, Formatter, Result};

use crate::{token::model::Token, utils};

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("Token")
            .field("token_address", &utils::bytes_to_address(&self.token_address))
            .field("name", &self.name)
            .field("symbol", &self.symbol)
            .field("decimals", &self.decimals)
            .finish()
    }
}
