use super::{ignore_unknown, VariantCodec};
use crate::catalog::{self, ScheduleKind};
use crate::config::{BaseFields, DailyFields, Defaults};
use crate::error::CodecError;
use crate::wire::{join_delimited, scalar, WireToken};

impl VariantCodec for DailyFields {
    const KIND: ScheduleKind = ScheduleKind::Daily;

    fn decode(
        tokens: &[WireToken<'_>],
        _base: &BaseFields,
        defaults: &Defaults,
    ) -> Result<Self, CodecError> {
        let mut fields = DailyFields::new(defaults);
        for token in tokens {
            match token.label() {
                catalog::BUSINESS_DAYS => fields.business_days = token.bool_value()?,
                catalog::BUSINESS_CALENDAR => fields.business_calendar = token.text_value()?,
                catalog::DAYS => fields.days = token.flags()?,
                _ => ignore_unknown(Self::KIND, token),
            }
        }
        Ok(fields)
    }

    fn encode(&self, _base: &mut BaseFields, out: &mut Vec<String>) {
        out.push(scalar(catalog::BUSINESS_DAYS, self.business_days));
        out.push(scalar(catalog::BUSINESS_CALENDAR, &self.business_calendar));
        out.push(join_delimited(catalog::DAYS, self.days));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::WireText;

    fn decode(raw: &[&str]) -> Result<DailyFields, CodecError> {
        let tokens: Vec<_> = raw.iter().map(|r| WireToken::split(r)).collect();
        let defaults = Defaults::default();
        DailyFields::decode(&tokens, &BaseFields::new(&defaults), &defaults)
    }

    #[test]
    fn test_days_need_exactly_seven_flags() {
        let six = "Days=true=true=true=true=true=false";
        assert_eq!(decode(&[six]).unwrap_err(), CodecError::arity(six, 8, 7));

        let fields = decode(&["Days=true=false=true=false=true=false=true"]).unwrap();
        assert_eq!(fields.days, [true, false, true, false, true, false, true]);
    }

    #[test]
    fn test_unknown_tokens_are_ignored() {
        let fields = decode(&["BusinessDays=true", "Frobnicate=7=8"]).unwrap();
        assert!(fields.business_days);
    }

    #[test]
    fn test_encode() {
        let fields = DailyFields {
            business_days: true,
            business_calendar: WireText::new("NYSE").unwrap(),
            days: [true, true, true, true, true, false, false],
        };
        let mut base = BaseFields::new(&Defaults::default());
        let mut out = Vec::new();
        fields.encode(&mut base, &mut out);
        assert_eq!(
            out,
            vec![
                "BusinessDays=true",
                "BusinessCalendar=NYSE",
                "Days=true=true=true=true=true=false=false",
            ]
        );
    }
}
