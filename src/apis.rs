pub mod ack;
pub mod apigatewayv2;
