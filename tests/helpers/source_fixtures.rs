//! Common source code fixtures for tests.

pub const DECAY: &str = "model Decay
  parameter Real k = 0.5 \"rate\";
  Real x(start = 1);
equation
  der(x) = -k * x;
end Decay;
";

pub const WITH_COMMENTS: &str = "// header comment
within Lib;
/* block
   comment */
model M // trailing
  Real x; // the state
equation
  // before the equation
  x = 1;
end M; // done
";

pub const CIRCUIT: &str = "model Circuit
  import SI = Modelica.Units.SI;
  Resistor r1(R = 10), r2(R = 20);
  Ground g;
protected
  SI.Voltage v;
equation
  connect(r1.n, r2.p);
  connect(r2.n, g.p);
  v = r1.v + r2.v;
end Circuit;
";

pub const FUNCTION: &str = "function clamp
  input Real u;
  input Real lo = 0;
  input Real hi = 1;
  output Real y;
algorithm
  if u < lo then
    y := lo;
  elseif u > hi then
    y := hi;
  else
    y := u;
  end if;
end clamp;
";

pub const PACKAGE: &str = "package P
  type Voltage = Real(unit = \"V\");
  type Color = enumeration(red, green, blue);
  connector Pin
    Voltage v;
    flow Real i;
  end Pin;
  partial model TwoPin
    Pin p, n;
  end TwoPin;
  model Resistor
    extends TwoPin;
    parameter Real R;
  equation
    p.v - n.v = R * p.i;
  end Resistor;
end P;
";

pub const ALL: &[&str] = &[DECAY, WITH_COMMENTS, CIRCUIT, FUNCTION, PACKAGE];
